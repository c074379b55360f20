use sea_orm_migration::{prelude::*, schema::*};

static IDX_PROFILE_EMAIL: &str = "idx_profile_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_uuid(Profile::Id))
                    .col(string(Profile::Email))
                    .col(string_null(Profile::FirstName))
                    .col(string_null(Profile::LastName))
                    .col(date_null(Profile::WeddingDate))
                    .col(timestamp(Profile::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Profile::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROFILE_EMAIL)
                    .table(Profile::Table)
                    .col(Profile::Email)
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
                    .name(IDX_PROFILE_EMAIL)
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    WeddingDate,
    CreatedAt,
    UpdatedAt,
}
