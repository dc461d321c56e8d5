use crate::{dto::input, error::Error, repository::Ticket};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Creates unused ticket with fresh token that expires after token lifespan
    ///
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<Ticket, Error>;

    async fn find_ticket(&self, id: Uuid) -> Result<Option<Ticket>, Error>;

    ///
    /// Find all tickets that belong to the user
    ///
    async fn find_user_tickets(&self, user_id: String) -> Result<Vec<Ticket>, Error>;

    ///
    /// Replaces token of the ticket with fresh one and extends its expiration.
    /// Previous token stops being current immediately.
    ///
    /// ### Returns
    /// updated ticket or [None] when ticket does not exist
    ///
    async fn rotate_token(&self, id: Uuid) -> Result<Option<Ticket>, Error>;

    ///
    /// Marks ticket as used. Token and its expiration are not checked.
    ///
    /// ### Returns
    /// - true when ticket was unused and now is used
    /// - false when ticket does not exist or had already been used
    ///
    async fn use_ticket(&self, id: Uuid) -> Result<bool, Error>;

    ///
    /// Validates presented token and consumes the ticket.
    /// Both happen in a single repository write, so a token replaced
    /// by a concurrent rotation can not consume the ticket.
    ///
    /// ### Errors
    /// - [Error::TicketInvalid] when
    ///     - ticket does not exist
    ///     - token is not the current one
    ///     - token expired
    ///     - ticket had already been used
    ///
    async fn redeem_ticket(&self, id: Uuid, redeem: input::TicketRedeem) -> Result<Ticket, Error>;
}
