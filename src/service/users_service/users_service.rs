use crate::{dto::input, error::Error, repository::User};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Sign up new user. Credentials are stored as given,
    /// usernames are not checked for uniqueness.
    ///
    async fn create_user(&self, credentials: input::Credentials) -> Result<User, Error>;

    ///
    /// Find user whose username and password both match exactly.
    ///
    /// Passwords are compared as given, they are not hashed.
    ///
    async fn find_user(&self, credentials: input::Credentials) -> Result<Option<User>, Error>;
}
