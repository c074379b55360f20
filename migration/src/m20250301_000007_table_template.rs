use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TableTemplate::Table)
                    .if_not_exists()
                    .col(string(TableTemplate::Id).primary_key())
                    .col(string(TableTemplate::Name))
                    .col(string_len(TableTemplate::Shape, 16))
                    .col(double(TableTemplate::Width))
                    .col(double(TableTemplate::Length))
                    .col(integer(TableTemplate::Seats))
                    .col(boolean(TableTemplate::IsPredefined).default(false))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TableTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TableTemplate {
    Table,
    Id,
    Name,
    Shape,
    Width,
    Length,
    Seats,
    IsPredefined,
}
