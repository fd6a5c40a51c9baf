use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260823_000001_create_movie_table::Movie;

static FK_SHOWING_MOVIE_ID: &str = "fk_showing_movie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showing::Table)
                    .if_not_exists()
                    .col(pk_auto(Showing::Id))
                    .col(integer(Showing::MovieId))
                    .col(timestamp(Showing::StartsAt))
                    .col(string(Showing::Auditorium))
                    .col(integer(Showing::AvailableSeats))
                    .col(double(Showing::Price))
                    .col(timestamp(Showing::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOWING_MOVIE_ID)
                    .from_tbl(Showing::Table)
                    .from_col(Showing::MovieId)
                    .to_tbl(Movie::Table)
                    .to_col(Movie::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOWING_MOVIE_ID)
                    .table(Showing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Showing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Showing {
    Table,
    Id,
    MovieId,
    StartsAt,
    Auditorium,
    AvailableSeats,
    Price,
    CreatedAt,
}
