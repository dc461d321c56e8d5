use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{tickets_service::TicketsService, users_service::UsersService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/login", post(login_user))
        .route("/api/v1/users/:user_id/tickets", get(get_user_tickets))
        .route("/api/v1/tickets", post(create_ticket))
        .route("/api/v1/tickets/:id", get(get_ticket))
        .route("/api/v1/tickets/:id/token", put(rotate_ticket_token))
        .route("/api/v1/tickets/:id/use", put(use_ticket))
        .route("/api/v1/tickets/:id/redeem", post(redeem_ticket))
}

async fn create_user(
    State(service): State<Arc<dyn UsersService>>,
    Json(credentials): Json<input::Credentials>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let user = service.create_user(credentials).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn login_user(
    State(service): State<Arc<dyn UsersService>>,
    Json(credentials): Json<input::Credentials>,
) -> Result<Json<output::User>, Error> {
    let user = service
        .find_user(credentials)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    Ok(Json(user.into()))
}

async fn get_user_tickets(
    State(service): State<Arc<dyn TicketsService>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = service
        .find_user_tickets(user_id)
        .await?
        .into_iter()
        .map(output::Ticket::from)
        .collect();

    Ok(Json(tickets))
}

async fn create_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Json(ticket): Json<input::TicketCreate>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

async fn get_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service
        .find_ticket(id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket.into()))
}

async fn rotate_ticket_token(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service
        .rotate_token(id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket.into()))
}

async fn use_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    match service.use_ticket(id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Err(Error::TicketAlreadyUsed),
    }
}

async fn redeem_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<Uuid>,
    Json(redeem): Json<input::TicketRedeem>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service.redeem_ticket(id, redeem).await?;

    Ok(Json(ticket.into()))
}
