use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ShowingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShowingRepository<'a, C> {
    /// Creates a new instance of [`ShowingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new showing, used only by seed/bootstrap code
    pub async fn create(
        &self,
        movie_id: i32,
        starts_at: NaiveDateTime,
        auditorium: &str,
        available_seats: i32,
        price: f64,
    ) -> Result<entity::showing::Model, DbErr> {
        let showing = entity::showing::ActiveModel {
            movie_id: ActiveValue::Set(movie_id),
            starts_at: ActiveValue::Set(starts_at),
            auditorium: ActiveValue::Set(auditorium.to_string()),
            available_seats: ActiveValue::Set(available_seats),
            price: ActiveValue::Set(price),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        showing.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        showing_id: i32,
    ) -> Result<Option<entity::showing::Model>, DbErr> {
        entity::prelude::Showing::find_by_id(showing_id)
            .one(self.db)
            .await
    }

    /// Showings for a movie starting after the given instant, earliest first
    pub async fn get_upcoming_for_movie(
        &self,
        movie_id: i32,
        after: NaiveDateTime,
    ) -> Result<Vec<entity::showing::Model>, DbErr> {
        entity::prelude::Showing::find()
            .filter(entity::showing::Column::MovieId.eq(movie_id))
            .filter(entity::showing::Column::StartsAt.gt(after))
            .order_by_asc(entity::showing::Column::StartsAt)
            .all(self.db)
            .await
    }

    /// Atomically takes one seat from a showing.
    ///
    /// Issues a conditional decrement (`available_seats = available_seats - 1
    /// WHERE id = ? AND available_seats > 0`) so two concurrent bookings can
    /// never both take the last seat. Returns the number of rows affected:
    /// `1` when a seat was reserved, `0` when the showing was sold out or the
    /// ID is unknown.
    pub async fn reserve_seat(&self, showing_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Showing::update_many()
            .col_expr(
                entity::showing::Column::AvailableSeats,
                Expr::col(entity::showing::Column::AvailableSeats).sub(1),
            )
            .filter(entity::showing::Column::Id.eq(showing_id))
            .filter(entity::showing::Column::AvailableSeats.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
