pub use sea_orm_migration::prelude::*;

mod m20250301_000001_profile;
mod m20250301_000002_vendor_category;
mod m20250301_000003_vendor;
mod m20250301_000004_seating_table;
mod m20250301_000005_guest;
mod m20250301_000006_table_chair;
mod m20250301_000007_table_template;
mod m20250301_000008_seed_table_templates;
mod m20250301_000009_seed_vendor_categories;
mod m20250301_000010_vendor_access_token;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_profile::Migration),
            Box::new(m20250301_000002_vendor_category::Migration),
            Box::new(m20250301_000003_vendor::Migration),
            Box::new(m20250301_000004_seating_table::Migration),
            Box::new(m20250301_000005_guest::Migration),
            Box::new(m20250301_000006_table_chair::Migration),
            Box::new(m20250301_000007_table_template::Migration),
            Box::new(m20250301_000008_seed_table_templates::Migration),
            Box::new(m20250301_000009_seed_vendor_categories::Migration),
            Box::new(m20250301_000010_vendor_access_token::Migration),
        ]
    }
}
