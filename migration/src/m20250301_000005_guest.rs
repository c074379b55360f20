use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000001_profile::Profile, m20250301_000004_seating_table::SeatingTable};

static IDX_GUEST_CREATED_BY: &str = "idx_guest_created_by";
static IDX_GUEST_TABLE_ID: &str = "idx_guest_table_id";
static FK_GUEST_CREATED_BY: &str = "fk_guest_created_by";
static FK_GUEST_TABLE_ID: &str = "fk_guest_table_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(string(Guest::FirstName))
                    .col(string(Guest::LastName))
                    .col(string_null(Guest::AddressLine1))
                    .col(string_null(Guest::AddressLine2))
                    .col(string_null(Guest::City))
                    .col(string_null(Guest::State))
                    .col(string_null(Guest::PostalCode))
                    .col(string_null(Guest::Country))
                    .col(string_null(Guest::Email))
                    .col(integer_null(Guest::TableId))
                    .col(uuid(Guest::CreatedBy))
                    .col(timestamp(Guest::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Guest::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GUEST_CREATED_BY)
                            .from(Guest::Table, Guest::CreatedBy)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GUEST_TABLE_ID)
                            .from(Guest::Table, Guest::TableId)
                            .to(SeatingTable::Table, SeatingTable::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GUEST_CREATED_BY)
                    .table(Guest::Table)
                    .col(Guest::CreatedBy)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GUEST_TABLE_ID)
                    .table(Guest::Table)
                    .col(Guest::TableId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_GUEST_TABLE_ID).table(Guest::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_GUEST_CREATED_BY).table(Guest::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    Id,
    FirstName,
    LastName,
    AddressLine1,
    AddressLine2,
    City,
    State,
    PostalCode,
    Country,
    Email,
    TableId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
