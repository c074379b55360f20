use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorCategory::Id))
                    .col(string_uniq(VendorCategory::Name))
                    .col(string_uniq(VendorCategory::Slug))
                    .col(string_null(VendorCategory::Icon))
                    .col(text_null(VendorCategory::Description))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VendorCategory {
    Table,
    Id,
    Name,
    Slug,
    Icon,
    Description,
}
