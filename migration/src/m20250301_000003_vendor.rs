use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_vendor_category::VendorCategory;

static IDX_VENDOR_NAME: &str = "idx_vendor_name";
static IDX_VENDOR_CATEGORY_ID: &str = "idx_vendor_category_id";
static FK_VENDOR_CATEGORY_ID: &str = "fk_vendor_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(pk_auto(Vendor::Id))
                    .col(string(Vendor::Name))
                    .col(integer_null(Vendor::CategoryId))
                    .col(text_null(Vendor::Description))
                    .col(json_binary_null(Vendor::ContactInfo))
                    .col(json_binary_null(Vendor::SocialMedia))
                    .col(json_binary_null(Vendor::PricingDetails))
                    .col(json_binary(Vendor::GalleryImages).default(Expr::cust("'[]'")))
                    .col(json_binary_null(Vendor::Availability))
                    .col(json_binary(Vendor::ServicesOffered).default(Expr::cust("'[]'")))
                    .col(json_binary(Vendor::Amenities).default(Expr::cust("'[]'")))
                    .col(json_binary(Vendor::Faq).default(Expr::cust("'[]'")))
                    .col(boolean(Vendor::IsFeatured).default(false))
                    .col(boolean(Vendor::IsHidden).default(false))
                    .col(string_null(Vendor::Slug).unique_key())
                    .col(string_null(Vendor::Username).unique_key())
                    .col(string_null(Vendor::PasswordHash))
                    .col(timestamp(Vendor::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Vendor::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VENDOR_CATEGORY_ID)
                            .from(Vendor::Table, Vendor::CategoryId)
                            .to(VendorCategory::Table, VendorCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENDOR_NAME)
                    .table(Vendor::Table)
                    .col(Vendor::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VENDOR_CATEGORY_ID)
                    .table(Vendor::Table)
                    .col(Vendor::CategoryId)
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
                    .name(IDX_VENDOR_CATEGORY_ID)
                    .table(Vendor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VENDOR_NAME)
                    .table(Vendor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vendor {
    Table,
    Id,
    Name,
    CategoryId,
    Description,
    ContactInfo,
    SocialMedia,
    PricingDetails,
    GalleryImages,
    Availability,
    ServicesOffered,
    Amenities,
    Faq,
    IsFeatured,
    IsHidden,
    Slug,
    Username,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
