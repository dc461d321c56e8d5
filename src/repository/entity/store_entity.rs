use super::{TicketEntity, UserEntity};
use serde::{Deserialize, Serialize};

///
/// Whole persisted collection. It is always loaded and saved as a unit.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreEntity {
    #[serde(default)]
    pub tickets: Vec<TicketEntity>,

    #[serde(default)]
    pub users: Vec<UserEntity>,
}
