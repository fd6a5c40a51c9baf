use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a confirmed ticket linking a user to a showing
    pub async fn create(
        &self,
        user_id: i32,
        showing_id: i32,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            showing_id: ActiveValue::Set(showing_id),
            purchased_at: ActiveValue::Set(Utc::now().naive_utc()),
            status: ActiveValue::Set("confirmed".to_string()),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    /// All tickets owned by a user, each paired with its showing
    pub async fn get_by_user_with_showings(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::ticket::Model, Option<entity::showing::Model>)>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Showing)
            .all(self.db)
            .await
    }

    pub async fn count_by_showing(&self, showing_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ShowingId.eq(showing_id))
            .count(self.db)
            .await
    }
}
