use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_profile::Profile;

static IDX_SEATING_TABLE_CREATED_BY: &str = "idx_seating_table_created_by";
static FK_SEATING_TABLE_CREATED_BY: &str = "fk_seating_table_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatingTable::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatingTable::Id))
                    .col(string(SeatingTable::Name))
                    .col(string_len(SeatingTable::Shape, 16))
                    .col(double(SeatingTable::Width))
                    .col(double(SeatingTable::Length))
                    .col(uuid(SeatingTable::CreatedBy))
                    .col(timestamp(SeatingTable::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(SeatingTable::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEATING_TABLE_CREATED_BY)
                            .from(SeatingTable::Table, SeatingTable::CreatedBy)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEATING_TABLE_CREATED_BY)
                    .table(SeatingTable::Table)
                    .col(SeatingTable::CreatedBy)
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
                    .name(IDX_SEATING_TABLE_CREATED_BY)
                    .table(SeatingTable::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeatingTable::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SeatingTable {
    Table,
    Id,
    Name,
    Shape,
    Width,
    Length,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
