use crate::repository::{self, Ticket};
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new unused ticket with freshly generated id
    ///
    async fn insert(
        &self,
        user_id: &str,
        event_id: &str,
        token: Uuid,
        token_expiration: OffsetDateTime,
    ) -> Result<Ticket, repository::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds tickets that belong to the user in insertion order
    ///
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Replaces token and its expiration in a single write
    ///
    /// ### Errors
    /// - [repository::Error::NoRecordUpdated] when ticket does not exist
    ///
    async fn update_token(
        &self,
        id: Uuid,
        token: Uuid,
        token_expiration: OffsetDateTime,
    ) -> Result<Ticket, repository::Error>;

    ///
    /// Marks ticket as used
    ///
    /// ### Errors
    /// - [repository::Error::NoRecordUpdated] when
    ///     - ticket does not exist
    ///     - ticket had already been used
    ///
    async fn update_is_used(&self, id: Uuid) -> Result<(), repository::Error>;

    ///
    /// Marks ticket as used only when `token` is valid for it at `at`.
    /// Validation and the update happen under the same write.
    ///
    /// ### Errors
    /// - [repository::Error::NoRecordUpdated] when
    ///     - ticket does not exist
    ///     - ticket had already been used
    ///     - token is not the current one
    ///     - token expired before `at`
    ///
    async fn update_is_used_with_token(
        &self,
        id: Uuid,
        token: Uuid,
        at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error>;
}
