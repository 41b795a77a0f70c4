// src/utils/identity.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{config::Config, error::AppError, repositories::Repositories};

/// The account a request acts on behalf of.
///
/// There is no login: every request is attributed to the configured admin
/// account.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    Repositories: FromRef<S>,
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repos = Repositories::from_ref(state);
        let config = Config::from_ref(state);

        resolve(&repos, &config.admin_username).await
    }
}

/// Looks up the account named `username`.
/// A missing account is a server fault: the seeder always creates it.
pub async fn resolve(repos: &Repositories, username: &str) -> Result<CurrentUser, AppError> {
    let user = repos
        .users
        .find_by_username(username)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError(format!("Author account '{}' does not exist", username))
        })?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::NewUser;
    use chrono::Utc;

    #[tokio::test]
    async fn resolves_existing_account() {
        let repos = Repositories::in_memory();
        let now = Utc::now();
        let admin = repos
            .users
            .create(NewUser::new("Admin", "admin@example.com", now, now))
            .await
            .unwrap();

        let caller = resolve(&repos, "Admin").await.unwrap();
        assert_eq!(caller.id, admin.id);
        assert_eq!(caller.username, "Admin");
    }

    #[tokio::test]
    async fn missing_account_is_a_server_error() {
        let repos = Repositories::in_memory();
        let err = resolve(&repos, "Admin").await.unwrap_err();
        assert!(matches!(err, AppError::InternalServerError(_)));
    }
}
