use super::UsersService;
use crate::{
    dto::input,
    error::Error,
    repository::{User, UsersRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct UsersServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn create_user(
        &self,
        input::Credentials { username, password }: input::Credentials,
    ) -> Result<User, Error> {
        tracing::info!(%username, "creating user");

        let user = self.repository.insert(&username, &password).await?;
        tracing::info!(id = %user.id, "created user");

        Ok(user)
    }

    async fn find_user(
        &self,
        input::Credentials { username, password }: input::Credentials,
    ) -> Result<Option<User>, Error> {
        tracing::debug!(%username, "finding user");

        Ok(self.repository.find(&username, &password).await?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{self, MockUsersRepository};
    use std::io;
    use uuid::Uuid;

    fn credentials(username: &str, password: &str) -> input::Credentials {
        input::Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_values_passed() {
        let mut repository = MockUsersRepository::new();
        repository
            .expect_insert()
            .withf(|username, password| username == "alice" && password == "secret")
            .returning(|username, password| {
                Ok(User {
                    id: Uuid::new_v4(),
                    username: username.to_string(),
                    password: password.to_string(),
                })
            });
        let service = UsersServiceImpl::new(Arc::new(repository));

        let user = service
            .create_user(credentials("alice", "secret"))
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn create_user_empty_credentials_stored() {
        let mut repository = MockUsersRepository::new();
        repository
            .expect_insert()
            .times(1)
            .withf(|username, password| username.is_empty() && password.is_empty())
            .returning(|username, password| {
                Ok(User {
                    id: Uuid::new_v4(),
                    username: username.to_string(),
                    password: password.to_string(),
                })
            });
        let service = UsersServiceImpl::new(Arc::new(repository));

        let user = service.create_user(credentials("", "")).await.unwrap();

        assert!(user.username.is_empty());
    }

    #[tokio::test]
    async fn create_user_database_error() {
        let mut repository = MockUsersRepository::new();
        repository.expect_insert().returning(|_, _| {
            Err(repository::Error::Io(io::Error::other(
                "any database error",
            )))
        });
        let service = UsersServiceImpl::new(Arc::new(repository));

        let create_result = service.create_user(credentials("alice", "secret")).await;

        assert!(matches!(create_result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn find_user_not_exist() {
        let mut repository = MockUsersRepository::new();
        repository.expect_find().returning(|_, _| Ok(None));
        let service = UsersServiceImpl::new(Arc::new(repository));

        let found = service
            .find_user(credentials("alice", "wrong"))
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
