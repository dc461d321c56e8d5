use crate::repository;
use serde::Serialize;
use uuid::Uuid;

///
/// User as seen by clients. Password never leaves the server.
///
#[derive(Debug, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl From<repository::User> for User {
    fn from(value: repository::User) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}
