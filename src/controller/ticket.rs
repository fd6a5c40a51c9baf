use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::get_user_from_session,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        ticket::{BookingPreviewDto, TicketDto},
    },
    service::{booking::BookingService, ticket::TicketService},
};

pub static TICKET_TAG: &str = "ticket";

/// Show the booking confirmation details for a showing
///
/// # Responses
/// - 200 (OK): The movie and showing the caller is about to book
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Unknown showing ID
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/book/{showing_id}",
    tag = TICKET_TAG,
    params(
        ("showing_id" = i32, Path, description = "ID of the showing")
    ),
    responses(
        (status = 200, description = "Booking confirmation details", body = BookingPreviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Showing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(showing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let _user = get_user_from_session(&state, &session).await?;

    let preview = BookingService::new(&state.db)
        .get_booking_preview(showing_id)
        .await?;

    Ok(Json(preview))
}

/// Book one seat of a showing for the logged in user
///
/// # Responses
/// - 201 (Created): Seat reserved, returns the new ticket
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Unknown showing ID
/// - 409 (Conflict): No seats left for this showing
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/book/{showing_id}",
    tag = TICKET_TAG,
    params(
        ("showing_id" = i32, Path, description = "ID of the showing")
    ),
    responses(
        (status = 201, description = "Ticket booked", body = TicketDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Showing not found", body = ErrorDto),
        (status = 409, description = "No seats left", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(showing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ticket = BookingService::new(&state.db)
        .book_ticket(user.id, showing_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// List the logged in user's tickets
///
/// # Responses
/// - 200 (OK): Every ticket the caller has booked
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/my-tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "The caller's tickets", body = Vec<TicketDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tickets = TicketService::new(&state.db)
        .get_user_tickets(user.id)
        .await?;

    Ok(Json(tickets))
}
