use super::TicketsRepository;
use crate::repository::{self, Error, Store, Ticket, TicketEntity};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsRepositoryImpl {
    store: Arc<Store>,
}

impl TicketsRepositoryImpl {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        user_id: &str,
        event_id: &str,
        token: Uuid,
        token_expiration: OffsetDateTime,
    ) -> Result<Ticket, repository::Error> {
        let entity = TicketEntity {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            event_id: event_id.to_string(),
            current_token: token,
            token_expiration,
            is_used: false,
        };

        let inserted = self
            .store
            .modify(move |store| {
                store.tickets.push(entity.clone());
                Some(entity)
            })
            .await?
            .map(Ticket::from)
            .ok_or(Error::NoRecordUpdated)?;

        Ok(inserted)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .store
            .read(|store| {
                store
                    .tickets
                    .iter()
                    .find(|ticket| ticket.id == id)
                    .cloned()
                    .map(Ticket::from)
            })
            .await;

        Ok(ticket)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Ticket>, repository::Error> {
        let tickets = self
            .store
            .read(|store| {
                store
                    .tickets
                    .iter()
                    .filter(|ticket| ticket.user_id == user_id)
                    .cloned()
                    .map(Ticket::from)
                    .collect::<Vec<_>>()
            })
            .await;

        Ok(tickets)
    }

    async fn update_token(
        &self,
        id: Uuid,
        token: Uuid,
        token_expiration: OffsetDateTime,
    ) -> Result<Ticket, repository::Error> {
        self.store
            .modify(|store| {
                let ticket = store.tickets.iter_mut().find(|ticket| ticket.id == id)?;
                ticket.current_token = token;
                ticket.token_expiration = token_expiration;

                Some(Ticket::from(ticket.clone()))
            })
            .await?
            .ok_or(Error::NoRecordUpdated)
    }

    async fn update_is_used(&self, id: Uuid) -> Result<(), repository::Error> {
        self.store
            .modify(|store| {
                let ticket = store
                    .tickets
                    .iter_mut()
                    .find(|ticket| ticket.id == id && !ticket.is_used)?;
                ticket.is_used = true;

                Some(())
            })
            .await?
            .ok_or(Error::NoRecordUpdated)
    }

    async fn update_is_used_with_token(
        &self,
        id: Uuid,
        token: Uuid,
        at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error> {
        self.store
            .modify(|store| {
                let entity = store.tickets.iter_mut().find(|ticket| ticket.id == id)?;
                if !Ticket::from(entity.clone()).is_token_valid(token, at) {
                    return None;
                }
                entity.is_used = true;

                Some(Ticket::from(entity.clone()))
            })
            .await?
            .ok_or(Error::NoRecordUpdated)
    }
}
