use super::ApplicationEnv;
use crate::{
    repository::{JsonFileStorage, Storage, Store, TicketsRepositoryImpl, UsersRepositoryImpl},
    service::{
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
        users_service::{UsersService, UsersServiceImpl},
    },
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub users_service: Arc<dyn UsersService>,
}

pub fn create_state(env: &ApplicationEnv) -> ApplicationState {
    let storage = JsonFileStorage::new(&env.db_path);
    tracing::info!(path = %storage.path().display(), "opening ticket store");

    let config = TicketsServiceConfig {
        token_lifespan: env.token_lifespan,
    };

    create_state_with_storage(Arc::new(storage), config)
}

///
/// Wires repositories and services on top of any [Storage]
///
pub fn create_state_with_storage(
    storage: Arc<dyn Storage>,
    config: TicketsServiceConfig,
) -> ApplicationState {
    let store = Arc::new(Store::new(storage));

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(store.clone());
    let tickets_repository = Arc::new(tickets_repository);

    let users_repository = UsersRepositoryImpl::new(store);
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    let users_service = UsersServiceImpl::new(users_repository);
    let users_service = Arc::new(users_service);

    ApplicationState {
        tickets_service,
        users_service,
    }
}
