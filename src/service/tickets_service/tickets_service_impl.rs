use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::input,
    error::Error,
    repository::{self, Ticket, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }

    ///
    /// Expiration is kept with millisecond precision, the same one it is stored with
    ///
    fn next_token_expiration(&self) -> Result<OffsetDateTime, Error> {
        let expiration = OffsetDateTime::now_utc() + self.config.token_lifespan;
        let expiration = expiration
            .replace_millisecond(expiration.millisecond())
            .map_err(anyhow::Error::from)?;

        Ok(expiration)
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(
        &self,
        input::TicketCreate { user_id, event_id }: input::TicketCreate,
    ) -> Result<Ticket, Error> {
        tracing::info!(%user_id, %event_id, "creating ticket");

        let token = Uuid::new_v4();
        let token_expiration = self.next_token_expiration()?;

        let ticket = self
            .repository
            .insert(&user_id, &event_id, token, token_expiration)
            .await?;
        tracing::info!(id = %ticket.id, "created ticket");

        Ok(ticket)
    }

    async fn find_ticket(&self, id: Uuid) -> Result<Option<Ticket>, Error> {
        tracing::debug!(%id, "finding ticket");

        Ok(self.repository.find(id).await?)
    }

    async fn find_user_tickets(&self, user_id: String) -> Result<Vec<Ticket>, Error> {
        tracing::debug!(%user_id, "finding user tickets");

        Ok(self.repository.find_by_user_id(&user_id).await?)
    }

    async fn rotate_token(&self, id: Uuid) -> Result<Option<Ticket>, Error> {
        tracing::info!(%id, "rotating ticket token");

        let token = Uuid::new_v4();
        let token_expiration = self.next_token_expiration()?;

        match self
            .repository
            .update_token(id, token, token_expiration)
            .await
        {
            Ok(ticket) => {
                tracing::info!(%id, "rotated ticket token");
                Ok(Some(ticket))
            }
            Err(repository::Error::NoRecordUpdated) => {
                tracing::info!(%id, "ticket to rotate not exist");
                Ok(None)
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn use_ticket(&self, id: Uuid) -> Result<bool, Error> {
        tracing::info!(%id, "using ticket");

        match self.repository.update_is_used(id).await {
            Ok(()) => {
                tracing::info!(%id, "used ticket");
                Ok(true)
            }
            Err(repository::Error::NoRecordUpdated) => {
                tracing::info!(%id, "ticket not exist or already used");
                Ok(false)
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn redeem_ticket(
        &self,
        id: Uuid,
        input::TicketRedeem { token }: input::TicketRedeem,
    ) -> Result<Ticket, Error> {
        tracing::info!(%id, "redeeming ticket");

        let now = OffsetDateTime::now_utc();
        match self
            .repository
            .update_is_used_with_token(id, token, now)
            .await
        {
            Ok(ticket) => {
                tracing::info!(%id, "redeemed ticket");
                Ok(ticket)
            }
            Err(repository::Error::NoRecordUpdated) => Err(Error::TicketInvalid(
                "ticket not exist, already used or token not valid",
            )),
            Err(err) => Err(Error::Database(err)),
        }
    }
}
