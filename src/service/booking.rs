use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{movie::MovieRepository, showing::ShowingRepository, ticket::TicketRepository},
    error::{booking::BookingError, Error},
    model::ticket::{BookingPreviewDto, TicketDto},
};

/// Service converting one unit of available inventory into one ticket.
///
/// The seat decrement and the ticket insert run inside a single transaction,
/// and the decrement itself is a conditional update that only matches rows
/// with seats remaining. Concurrent bookings against the last seat therefore
/// resolve to exactly one success and one [`BookingError::SoldOut`].
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Book one seat of a showing for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the already-authenticated user booking the seat
    /// - `showing_id` - ID of the showing to book against
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - The created ticket with its assigned ID and timestamp
    /// - `Err(Error::BookingError(BookingError::ShowingNotFound))` - Unknown showing ID
    /// - `Err(Error::BookingError(BookingError::SoldOut))` - No seats left
    /// - `Err(Error::DbErr)` - Database failure; nothing is persisted
    pub async fn book_ticket(&self, user_id: i32, showing_id: i32) -> Result<TicketDto, Error> {
        let txn = self.db.begin().await?;

        let showing_repository = ShowingRepository::new(&txn);

        let Some(showing) = showing_repository.get_by_id(showing_id).await? else {
            return Err(BookingError::ShowingNotFound(showing_id).into());
        };

        // Conditional decrement; zero rows affected means another booking got
        // the last seat first. The early return drops the transaction, which
        // rolls it back.
        let rows_affected = showing_repository.reserve_seat(showing_id).await?;
        if rows_affected == 0 {
            return Err(BookingError::SoldOut(showing_id).into());
        }

        let ticket = TicketRepository::new(&txn)
            .create(user_id, showing_id)
            .await?;

        let movie = MovieRepository::new(&txn)
            .get_by_id(showing.movie_id)
            .await?
            .ok_or_else(|| {
                // Would only occur if the foreign key constraint tying a
                // showing to its movie is not enforced
                Error::InternalError(format!(
                    "Failed to find movie ID {} for showing ID {}",
                    showing.movie_id, showing.id
                ))
            })?;

        txn.commit().await?;

        Ok(TicketDto {
            id: ticket.id,
            movie_title: movie.title,
            starts_at: showing.starts_at,
            auditorium: showing.auditorium,
            price: showing.price,
            purchased_at: ticket.purchased_at,
            status: ticket.status,
        })
    }

    /// Details shown on the booking confirmation step.
    pub async fn get_booking_preview(&self, showing_id: i32) -> Result<BookingPreviewDto, Error> {
        let Some(showing) = ShowingRepository::new(self.db).get_by_id(showing_id).await? else {
            return Err(BookingError::ShowingNotFound(showing_id).into());
        };

        let movie = MovieRepository::new(self.db)
            .get_by_id(showing.movie_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find movie ID {} for showing ID {}",
                    showing.movie_id, showing.id
                ))
            })?;

        Ok(BookingPreviewDto {
            movie: movie.into(),
            showing: showing.into(),
        })
    }
}
