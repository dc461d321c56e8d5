use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct TicketRedeem {
    pub token: Uuid,
}
