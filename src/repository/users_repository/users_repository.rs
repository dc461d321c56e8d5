use crate::repository::{self, User};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new user with freshly generated id.
    /// Usernames are not required to be unique.
    ///
    async fn insert(&self, username: &str, password: &str) -> Result<User, repository::Error>;

    ///
    /// Finds first user that matches both username and password exactly
    ///
    async fn find(&self, username: &str, password: &str)
        -> Result<Option<User>, repository::Error>;
}
