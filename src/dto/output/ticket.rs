use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub user_id: String,
    pub event_id: String,
    pub current_token: Uuid,
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub token_expiration: OffsetDateTime,
    pub is_used: bool,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            event_id: value.event_id,
            current_token: value.current_token,
            token_expiration: value.token_expiration,
            is_used: value.is_used,
        }
    }
}
