mod dto;
mod entity;
mod error;
mod storage;
mod store;
mod tickets_repository;
mod users_repository;

pub use dto::*;
pub use entity::*;
pub use error::*;
pub use storage::*;
pub use store::*;
pub use tickets_repository::*;
pub use users_repository::*;
