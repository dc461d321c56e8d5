use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketEntity {
    pub id: Uuid,

    pub user_id: String,
    pub event_id: String,

    pub current_token: Uuid,
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub token_expiration: OffsetDateTime,

    pub is_used: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_entity_json_token_expiration_in_millis() {
        let json = r#"{
            "id": "8f5c1f6e-3f0b-4a43-9a57-0e4b4c9d2f11",
            "userId": "u1",
            "eventId": "e1",
            "currentToken": "1b7e7e3a-5a43-4c8e-b1c4-22d2b8c2b0a9",
            "tokenExpiration": 1700000000123,
            "isUsed": false
        }"#;

        let entity = serde_json::from_str::<TicketEntity>(json).unwrap();

        assert_eq!(
            entity.token_expiration.unix_timestamp_nanos(),
            1_700_000_000_123_000_000
        );

        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["tokenExpiration"].as_i64(), Some(1_700_000_000_123));
    }
}
