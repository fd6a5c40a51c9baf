//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create a new user account
/// - `POST /api/auth/login` - Verify credentials and establish a session
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/movies` - List the movie catalog
/// - `GET /api/movies/{movie_id}` - Movie detail with upcoming showings
/// - `GET /api/book/{showing_id}` - Booking confirmation details
/// - `POST /api/book/{showing_id}` - Book one seat
/// - `GET /api/my-tickets` - List the caller's tickets
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Boxoffice", description = "Boxoffice API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::movie::MOVIE_TAG, description = "Movie catalog API routes"),
        (name = controller::ticket::TICKET_TAG, description = "Ticket booking API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::movie::list_movies))
        .routes(routes!(controller::movie::get_movie))
        .routes(routes!(
            controller::ticket::get_booking,
            controller::ticket::book_ticket
        ))
        .routes(routes!(controller::ticket::my_tickets))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
