use sea_orm_migration::prelude::*;

use crate::m20250301_000007_table_template::TableTemplate;

/// `(id, name, shape, width, length, seats)`; dimensions are in inches.
const PREDEFINED_TEMPLATES: &[(&str, &str, &str, f64, f64, i32)] = &[
    ("round-48", "Round Table (48\")", "circle", 48.0, 48.0, 6),
    ("round-60", "Round Table (60\")", "circle", 60.0, 60.0, 8),
    ("round-72", "Round Table (72\")", "circle", 72.0, 72.0, 10),
    ("rect-6ft", "Banquet Table (6')", "rectangle", 72.0, 30.0, 6),
    ("rect-8ft", "Banquet Table (8')", "rectangle", 96.0, 30.0, 8),
    ("square-48", "Square Table (48\")", "square", 48.0, 48.0, 4),
    ("square-60", "Square Table (60\")", "square", 60.0, 60.0, 8),
    ("oval-96", "Oval Table (96\")", "oval", 96.0, 48.0, 10),
    ("serpentine", "Serpentine Table", "curved", 96.0, 30.0, 4),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(TableTemplate::Table).columns([
            TableTemplate::Id,
            TableTemplate::Name,
            TableTemplate::Shape,
            TableTemplate::Width,
            TableTemplate::Length,
            TableTemplate::Seats,
            TableTemplate::IsPredefined,
        ]);

        for (id, name, shape, width, length, seats) in PREDEFINED_TEMPLATES {
            insert.values_panic([
                (*id).into(),
                (*name).into(),
                (*shape).into(),
                (*width).into(),
                (*length).into(),
                (*seats).into(),
                true.into(),
            ]);
        }

        // Re-seeding restores predefined rows to their canonical values
        insert.on_conflict(
            OnConflict::column(TableTemplate::Id)
                .update_columns([
                    TableTemplate::Name,
                    TableTemplate::Shape,
                    TableTemplate::Width,
                    TableTemplate::Length,
                    TableTemplate::Seats,
                    TableTemplate::IsPredefined,
                ])
                .to_owned(),
        );

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids = PREDEFINED_TEMPLATES.iter().map(|(id, ..)| *id);

        let delete = Query::delete()
            .from_table(TableTemplate::Table)
            .and_where(Expr::col(TableTemplate::Id).is_in(ids))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
