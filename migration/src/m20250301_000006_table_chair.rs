use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_profile::Profile, m20250301_000004_seating_table::SeatingTable,
    m20250301_000005_guest::Guest,
};

static IDX_TABLE_CHAIR_TABLE_ID: &str = "idx_table_chair_table_id";
static IDX_TABLE_CHAIR_GUEST_ID: &str = "idx_table_chair_guest_id";
static FK_TABLE_CHAIR_TABLE_ID: &str = "fk_table_chair_table_id";
static FK_TABLE_CHAIR_GUEST_ID: &str = "fk_table_chair_guest_id";
static FK_TABLE_CHAIR_CREATED_BY: &str = "fk_table_chair_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TableChair::Table)
                    .if_not_exists()
                    .col(pk_auto(TableChair::Id))
                    .col(integer(TableChair::TableId))
                    .col(integer_null(TableChair::GuestId))
                    .col(uuid(TableChair::CreatedBy))
                    .col(timestamp(TableChair::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TABLE_CHAIR_TABLE_ID)
                            .from(TableChair::Table, TableChair::TableId)
                            .to(SeatingTable::Table, SeatingTable::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TABLE_CHAIR_GUEST_ID)
                            .from(TableChair::Table, TableChair::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TABLE_CHAIR_CREATED_BY)
                            .from(TableChair::Table, TableChair::CreatedBy)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TABLE_CHAIR_TABLE_ID)
                    .table(TableChair::Table)
                    .col(TableChair::TableId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TABLE_CHAIR_GUEST_ID)
                    .table(TableChair::Table)
                    .col(TableChair::GuestId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TABLE_CHAIR_GUEST_ID)
                    .table(TableChair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TABLE_CHAIR_TABLE_ID)
                    .table(TableChair::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TableChair::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TableChair {
    Table,
    Id,
    TableId,
    GuestId,
    CreatedBy,
    CreatedAt,
}
