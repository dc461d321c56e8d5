pub mod tickets_service;
pub mod users_service;
