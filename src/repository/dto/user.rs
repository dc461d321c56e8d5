use crate::repository::UserEntity;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,

    pub username: String,
    pub password: String,
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            username: value.username,
            password: value.password,
        }
    }
}
