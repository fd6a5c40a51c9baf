pub use sea_orm_migration::prelude::*;

mod m20260823_000001_create_movie_table;
mod m20260823_000002_create_showing_table;
mod m20260823_000003_create_user_table;
mod m20260823_000004_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260823_000001_create_movie_table::Migration),
            Box::new(m20260823_000002_create_showing_table::Migration),
            Box::new(m20260823_000003_create_user_table::Migration),
            Box::new(m20260823_000004_create_ticket_table::Migration),
        ]
    }
}
