use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260823_000002_create_showing_table::Showing,
    m20260823_000003_create_user_table::BoxofficeUser,
};

static FK_TICKET_USER_ID: &str = "fk_ticket_user_id";
static FK_TICKET_SHOWING_ID: &str = "fk_ticket_showing_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::UserId))
                    .col(integer(Ticket::ShowingId))
                    .col(timestamp(Ticket::PurchasedAt))
                    .col(string(Ticket::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_USER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::UserId)
                    .to_tbl(BoxofficeUser::Table)
                    .to_col(BoxofficeUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_SHOWING_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::ShowingId)
                    .to_tbl(Showing::Table)
                    .to_col(Showing::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_USER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_SHOWING_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    UserId,
    ShowingId,
    PurchasedAt,
    Status,
}
