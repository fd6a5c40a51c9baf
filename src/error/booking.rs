use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("No seats available for showing ID {0:?}")]
    SoldOut(i32),
    #[error("Showing ID {0:?} not found")]
    ShowingNotFound(i32),
    #[error("Movie ID {0:?} not found")]
    MovieNotFound(i32),
}

impl BookingError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::SoldOut(showing_id) => {
                tracing::debug!(showing_id = %showing_id, "{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Sorry, no tickets available for this showing".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ShowingNotFound(_) => Self::not_found("Showing not found"),
            Self::MovieNotFound(_) => Self::not_found("Movie not found"),
        }
    }
}
