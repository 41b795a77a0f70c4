// tests/api_tests.rs

mod common;

use chrono::{DateTime, Utc};
use common::{create_quiz, spawn_app, spawn_seeded_app};

fn date(value: &serde_json::Value) -> DateTime<Utc> {
    value
        .as_str()
        .expect("date is not a string")
        .parse()
        .expect("date does not parse")
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .client
        .get(app.url("/api/random_path_that_does_not_exist"))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn get_missing_quiz_names_the_id() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/api/quiz/99999"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    let message = body["Error"].as_str().expect("Error member missing");
    assert!(message.contains("99999"));
    assert_eq!(message, "Quiz ID 99999 has not been found");
}

#[tokio::test]
async fn put_quiz_is_owned_by_admin() {
    let app = spawn_app().await;
    let admin = app.repos.users.find_by_username("Admin").await.unwrap().unwrap();

    let response = app
        .client
        .put(app.url("/api/quiz"))
        .json(&serde_json::json!({ "Title": "T", "Description": "D", "Text": "X" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let quiz: serde_json::Value = response.json().await.unwrap();
    assert!(quiz["Id"].as_i64().unwrap() > 0);
    assert_eq!(quiz["Title"], "T");
    assert_eq!(quiz["Description"], "D");
    assert_eq!(quiz["Text"], "X");
    assert_eq!(quiz["UserId"].as_i64().unwrap(), admin.id);
    assert_eq!(quiz["ViewCount"], 0);
    assert_eq!(quiz["CreatedDate"], quiz["LastModifiedDate"]);
}

#[tokio::test]
async fn put_then_get_returns_the_payload() {
    let app = spawn_app().await;
    let created = create_quiz(&app, "Roundtrip").await;
    let id = created["Id"].as_i64().unwrap();

    let fetched: serde_json::Value = app
        .client
        .get(app.url(&format!("/api/quiz/{}", id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched["Title"], "Roundtrip");
    assert_eq!(fetched["Description"], "Roundtrip description");
    assert_eq!(fetched["Text"], "Roundtrip text");
    assert!(fetched["Notes"].is_null());
}

#[tokio::test]
async fn responses_are_indented_json() {
    let app = spawn_app().await;
    let created = create_quiz(&app, "Pretty").await;

    let response = app
        .client
        .get(app.url(&format!("/api/quiz/{}", created["Id"])))
        .send()
        .await
        .unwrap();

    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    let text = response.text().await.unwrap();
    assert!(text.starts_with("{\n  \"Id\": "));
}

#[tokio::test]
async fn missing_payload_is_an_empty_500() {
    let app = spawn_app().await;

    for request in [
        app.client.put(app.url("/api/quiz")),
        app.client
            .put(app.url("/api/quiz"))
            .header("content-type", "application/json")
            .body("null"),
        app.client
            .post(app.url("/api/quiz"))
            .header("content-type", "application/json")
            .body("{ not json"),
    ] {
        let response = request.send().await.expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 500);
        assert!(response.text().await.unwrap().is_empty());
    }

    assert_eq!(app.repos.quizzes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn post_updates_editable_fields() {
    let app = spawn_app().await;
    let created = create_quiz(&app, "Before").await;
    let id = created["Id"].as_i64().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = app
        .client
        .post(app.url("/api/quiz"))
        .json(&serde_json::json!({
            "Id": id,
            "Title": "After",
            "Description": "New description",
            "Text": "New text",
            "Notes": "Some notes",
            "UserId": 999,
            "ViewCount": 5000
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["Id"].as_i64().unwrap(), id);
    assert_eq!(updated["Title"], "After");
    assert_eq!(updated["Notes"], "Some notes");
    assert_eq!(updated["UserId"], created["UserId"]);
    assert_eq!(updated["ViewCount"], created["ViewCount"]);
    assert_eq!(updated["CreatedDate"], created["CreatedDate"]);
}

#[tokio::test]
async fn post_stamps_last_modified_with_current_time() {
    // The last-modified date must move forward on edit rather than being
    // reset to the creation date.
    let app = spawn_app().await;
    let created = create_quiz(&app, "Stamped").await;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated: serde_json::Value = app
        .client
        .post(app.url("/api/quiz"))
        .json(&serde_json::json!({ "Id": created["Id"], "Title": "Stamped again" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(date(&updated["LastModifiedDate"]) > date(&updated["CreatedDate"]));
}

#[tokio::test]
async fn post_unknown_quiz_is_404_and_changes_nothing() {
    let app = spawn_app().await;
    let created = create_quiz(&app, "Untouched").await;

    let response = app
        .client
        .post(app.url("/api/quiz"))
        .json(&serde_json::json!({ "Id": 424242, "Title": "Ghost" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["Error"], "Quiz ID 424242 has not been found");

    let quizzes = app.repos.quizzes.list_all().await.unwrap();
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0].title, "Untouched");
    assert_eq!(quizzes[0].id, created["Id"].as_i64().unwrap());
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = spawn_app().await;
    let created = create_quiz(&app, "Doomed").await;
    let url = app.url(&format!("/api/quiz/{}", created["Id"]));

    let response = app.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().is_empty());

    let response = app.client.get(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = app.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn latest_is_newest_first_and_bounded() {
    let app = spawn_seeded_app(true).await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/latest/5"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(quizzes.len(), 5);
    let dates: Vec<DateTime<Utc>> = quizzes.iter().map(|q| date(&q["CreatedDate"])).collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn latest_defaults_to_ten() {
    let app = spawn_seeded_app(true).await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/latest"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(quizzes.len(), 10);
}

#[tokio::test]
async fn latest_puts_new_quiz_first() {
    let app = spawn_seeded_app(false).await;
    let created = create_quiz(&app, "Brand new").await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/latest/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0]["Id"], created["Id"]);
}

#[tokio::test]
async fn by_title_is_sorted_ascending() {
    let app = spawn_seeded_app(true).await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/bytitle/20"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(quizzes.len(), 20);
    let titles: Vec<&str> = quizzes.iter().map(|q| q["Title"].as_str().unwrap()).collect();
    assert!(titles.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(titles[0], "Are you more Light or Dark side of the Force?");
}

#[tokio::test]
async fn by_title_with_fewer_quizzes_than_requested() {
    let app = spawn_seeded_app(false).await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/bytitle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let titles: Vec<&str> = quizzes.iter().map(|q| q["Title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec![
            "Are you more Light or Dark side of the Force?",
            "GenX, GenY or GenZ?",
            "Which Shingeki No Kyojin character are you?",
        ]
    );
}

#[tokio::test]
async fn random_returns_distinct_existing_quizzes() {
    let app = spawn_seeded_app(true).await;

    let quizzes: Vec<serde_json::Value> = app
        .client
        .get(app.url("/api/quiz/random/7"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(quizzes.len(), 7);
    let mut ids: Vec<i64> = quizzes.iter().map(|q| q["Id"].as_i64().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
    for id in ids {
        assert!(app.repos.quizzes.find_by_id(id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn negative_count_yields_empty_list() {
    let app = spawn_seeded_app(false).await;

    for path in ["/api/quiz/latest/-1", "/api/quiz/bytitle/-3", "/api/quiz/random/-2"] {
        let quizzes: Vec<serde_json::Value> = app
            .client
            .get(app.url(path))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(quizzes.is_empty(), "{} returned quizzes", path);
    }
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/api/openapi.json")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let doc: serde_json::Value = response.json().await.unwrap();
    assert!(doc["paths"]["/api/quiz/{id}"].is_object());
}

#[tokio::test]
async fn non_numeric_path_segments_are_json_404s() {
    let app = spawn_app().await;

    for path in [
        "/api/quiz/abc",
        "/api/quiz/latest/abc",
        "/api/quiz/bytitle/ten",
        "/api/quiz/random/1.5",
        "/api/question/all/xyz",
        "/api/answer/abc",
        "/api/result/all/abc",
    ] {
        let response = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 404, "{}", path);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["Error"].is_string(), "{} has no Error member", path);
    }

    let response = app.client.delete(app.url("/api/quiz/abc")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn missing_payload_wins_over_missing_author() {
    let app = common::spawn_app_with(quizmaker::repositories::Repositories::in_memory()).await;

    let response = app.client.put(app.url("/api/quiz")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert!(response.text().await.unwrap().is_empty());
}
