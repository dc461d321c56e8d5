use crate::repository::TicketEntity;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,

    pub user_id: String,
    pub event_id: String,

    pub current_token: Uuid,
    pub token_expiration: OffsetDateTime,

    pub is_used: bool,
}

impl Ticket {
    ///
    /// Checks whether `token` may be accepted for this ticket at `at`.
    ///
    /// The store never enforces expiration itself, so every caller that trusts
    /// a presented token has to go through this check.
    ///
    pub fn is_token_valid(&self, token: Uuid, at: OffsetDateTime) -> bool {
        !self.is_used && self.current_token == token && at <= self.token_expiration
    }
}

impl From<TicketEntity> for Ticket {
    fn from(value: TicketEntity) -> Self {
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
