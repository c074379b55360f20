use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_vendor::Vendor;

static IDX_VENDOR_ACCESS_TOKEN_VENDOR_ID: &str = "idx_vendor_access_token_vendor_id";
static FK_VENDOR_ACCESS_TOKEN_VENDOR_ID: &str = "fk_vendor_access_token_vendor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorAccessToken::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorAccessToken::Id))
                    .col(integer(VendorAccessToken::VendorId))
                    .col(string_uniq(VendorAccessToken::TokenHash))
                    .col(timestamp(VendorAccessToken::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(VendorAccessToken::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VENDOR_ACCESS_TOKEN_VENDOR_ID)
                            .from(VendorAccessToken::Table, VendorAccessToken::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENDOR_ACCESS_TOKEN_VENDOR_ID)
                    .table(VendorAccessToken::Table)
                    .col(VendorAccessToken::VendorId)
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
                    .name(IDX_VENDOR_ACCESS_TOKEN_VENDOR_ID)
                    .table(VendorAccessToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VendorAccessToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VendorAccessToken {
    Table,
    Id,
    VendorId,
    TokenHash,
    CreatedAt,
    ExpiresAt,
}
