use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};

pub struct MovieRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MovieRepository<'a, C> {
    /// Creates a new instance of [`MovieRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new movie, used only by seed/bootstrap code
    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        duration_minutes: i32,
    ) -> Result<entity::movie::Model, DbErr> {
        let movie = entity::movie::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(|d| d.to_string())),
            duration_minutes: ActiveValue::Set(duration_minutes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        movie.insert(self.db).await
    }

    pub async fn get_by_id(&self, movie_id: i32) -> Result<Option<entity::movie::Model>, DbErr> {
        entity::prelude::Movie::find_by_id(movie_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::movie::Model>, DbErr> {
        entity::prelude::Movie::find().all(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Movie::find().count(self.db).await
    }
}
