use super::UsersRepository;
use crate::repository::{self, Error, Store, User, UserEntity};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct UsersRepositoryImpl {
    store: Arc<Store>,
}

impl UsersRepositoryImpl {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(&self, username: &str, password: &str) -> Result<User, repository::Error> {
        let entity = UserEntity {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: password.to_string(),
        };

        let inserted = self
            .store
            .modify(move |store| {
                store.users.push(entity.clone());
                Some(entity)
            })
            .await?
            .map(User::from)
            .ok_or(Error::NoRecordUpdated)?;

        Ok(inserted)
    }

    async fn find(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, repository::Error> {
        let user = self
            .store
            .read(|store| {
                store
                    .users
                    .iter()
                    .find(|user| user.username == username && user.password == password)
                    .cloned()
                    .map(User::from)
            })
            .await;

        Ok(user)
    }
}
