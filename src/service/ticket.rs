use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{data::ticket::TicketRepository, error::Error, model::ticket::TicketDto};

/// Service for listing a user's own tickets.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All tickets owned by the given user, with showing and movie details
    /// for display.
    pub async fn get_user_tickets(&self, user_id: i32) -> Result<Vec<TicketDto>, Error> {
        let tickets = TicketRepository::new(self.db)
            .get_by_user_with_showings(user_id)
            .await?;

        let movie_ids: Vec<i32> = tickets
            .iter()
            .filter_map(|(_, showing)| showing.as_ref().map(|s| s.movie_id))
            .collect();

        let movies: HashMap<i32, entity::movie::Model> = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Id.is_in(movie_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|movie| (movie.id, movie))
            .collect();

        tickets
            .into_iter()
            .map(|(ticket, maybe_showing)| {
                let showing = maybe_showing.ok_or_else(|| {
                    // Would only occur if the foreign key constraint tying a
                    // ticket to its showing is not enforced
                    Error::InternalError(format!(
                        "Failed to find showing ID {} for ticket ID {}",
                        ticket.showing_id, ticket.id
                    ))
                })?;

                let movie = movies.get(&showing.movie_id).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find movie ID {} for showing ID {}",
                        showing.movie_id, showing.id
                    ))
                })?;

                Ok(TicketDto {
                    id: ticket.id,
                    movie_title: movie.title.clone(),
                    starts_at: showing.starts_at,
                    auditorium: showing.auditorium,
                    price: showing.price,
                    purchased_at: ticket.purchased_at,
                    status: ticket.status,
                })
            })
            .collect()
    }
}
