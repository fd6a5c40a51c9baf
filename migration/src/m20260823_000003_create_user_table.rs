use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoxofficeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BoxofficeUser::Id))
                    .col(string_uniq(BoxofficeUser::Username))
                    .col(string_uniq(BoxofficeUser::Email))
                    .col(string(BoxofficeUser::PasswordHash))
                    .col(timestamp(BoxofficeUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoxofficeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoxofficeUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    CreatedAt,
}
