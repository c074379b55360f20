use sea_orm_migration::prelude::*;

use crate::m20250301_000002_vendor_category::VendorCategory;

/// `(name, slug, icon, description)`
const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Venues", "venues", "building", "Ceremony and reception locations"),
    ("Photographers", "photographers", "camera", "Wedding and engagement photography"),
    ("Videographers", "videographers", "video", "Ceremony and highlight films"),
    ("Caterers", "caterers", "utensils", "Food and beverage service"),
    ("Bakeries", "bakeries", "cake", "Wedding cakes and desserts"),
    ("Florists", "florists", "flower", "Bouquets, arrangements and decor"),
    ("Music & Entertainment", "music-entertainment", "music", "Bands, DJs and performers"),
    ("Wedding Planners", "wedding-planners", "clipboard", "Full-service and day-of coordination"),
    ("Attire", "attire", "shirt", "Gowns, suits and accessories"),
    ("Hair & Makeup", "hair-makeup", "brush", "Beauty services for the wedding party"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(VendorCategory::Table).columns([
            VendorCategory::Name,
            VendorCategory::Slug,
            VendorCategory::Icon,
            VendorCategory::Description,
        ]);

        for (name, slug, icon, description) in CATEGORIES {
            insert.values_panic([
                (*name).into(),
                (*slug).into(),
                (*icon).into(),
                (*description).into(),
            ]);
        }

        // Categories edited after seeding keep their edits
        insert.on_conflict(OnConflict::column(VendorCategory::Slug).do_nothing().to_owned());

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let slugs = CATEGORIES.iter().map(|(_, slug, ..)| *slug);

        let delete = Query::delete()
            .from_table(VendorCategory::Table)
            .and_where(Expr::col(VendorCategory::Slug).is_in(slugs))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
