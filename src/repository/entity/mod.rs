mod store_entity;
mod ticket_entity;
mod user_entity;

pub use store_entity::*;
pub use ticket_entity::*;
pub use user_entity::*;
