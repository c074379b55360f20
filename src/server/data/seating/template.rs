use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct TableTemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableTemplateRepository<'a, C> {
    /// Creates a new instance of [`TableTemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all templates, predefined templates first then by name
    pub async fn get_all(&self) -> Result<Vec<entity::table_template::Model>, DbErr> {
        entity::prelude::TableTemplate::find()
            .order_by_desc(entity::table_template::Column::IsPredefined)
            .order_by_asc(entity::table_template::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::table_template::Model>, DbErr> {
        entity::prelude::TableTemplate::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Inserts a template or overwrites every column of the template with the same ID
    ///
    /// Writing identical values again leaves the row unchanged.
    pub async fn upsert(
        &self,
        template: entity::table_template::Model,
    ) -> Result<entity::table_template::Model, DbErr> {
        entity::prelude::TableTemplate::insert(entity::table_template::ActiveModel {
            id: ActiveValue::Set(template.id),
            name: ActiveValue::Set(template.name),
            shape: ActiveValue::Set(template.shape),
            width: ActiveValue::Set(template.width),
            length: ActiveValue::Set(template.length),
            seats: ActiveValue::Set(template.seats),
            is_predefined: ActiveValue::Set(template.is_predefined),
        })
        .on_conflict(
            OnConflict::column(entity::table_template::Column::Id)
                .update_columns([
                    entity::table_template::Column::Name,
                    entity::table_template::Column::Shape,
                    entity::table_template::Column::Width,
                    entity::table_template::Column::Length,
                    entity::table_template::Column::Seats,
                    entity::table_template::Column::IsPredefined,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Deletes a custom template
    ///
    /// Predefined templates are never matched, check [`DeleteResult::rows_affected`] to
    /// confirm the deletion.
    pub async fn delete_custom(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::TableTemplate::delete_many()
            .filter(entity::table_template::Column::Id.eq(id))
            .filter(entity::table_template::Column::IsPredefined.eq(false))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_all {
        use aisle_test_utils::prelude::*;

        use crate::server::data::seating::template::TableTemplateRepository;

        /// Expect predefined templates before custom ones
        #[tokio::test]
        async fn orders_predefined_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_template("custom-a", false)
                .with_template("round-60", true)
                .build()
                .await?;

            let repo = TableTemplateRepository::new(&test.db);
            let templates = repo.get_all().await?;

            let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, vec!["round-60", "custom-a"]);

            Ok(())
        }
    }

    mod upsert {
        use aisle_test_utils::prelude::*;
        use entity::sea_orm_active_enums::TableShape;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::data::seating::template::TableTemplateRepository;

        /// Expect the stored template to match the inserted fields exactly
        #[tokio::test]
        async fn inserts_round_60() -> Result<(), TestError> {
            let test = TestBuilder::new().with_wedding_tables().build().await?;

            let repo = TableTemplateRepository::new(&test.db);
            repo.upsert(factory::mock_template_model("round-60", true))
                .await?;

            let template = repo.get("round-60").await?.expect("template should exist");

            assert_eq!(template.name, "Round Table (60\")");
            assert_eq!(template.shape, TableShape::Circle);
            assert_eq!(template.width, 60.0);
            assert_eq!(template.length, 60.0);
            assert_eq!(template.seats, 8);
            assert!(template.is_predefined);

            Ok(())
        }

        /// Expect re-running an identical upsert to leave row count and values unchanged
        #[tokio::test]
        async fn is_idempotent() -> Result<(), TestError> {
            let test = TestBuilder::new().with_wedding_tables().build().await?;

            let repo = TableTemplateRepository::new(&test.db);
            let first = repo
                .upsert(factory::mock_template_model("round-60", true))
                .await?;
            let second = repo
                .upsert(factory::mock_template_model("round-60", true))
                .await?;

            let count = entity::prelude::TableTemplate::find().count(&test.db).await?;

            assert_eq!(count, 1);
            assert_eq!(first, second);

            Ok(())
        }

        /// Expect the existing row to be overwritten on conflict
        #[tokio::test]
        async fn overwrites_existing() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_template("banquet", false)
                .build()
                .await?;

            let mut template = factory::mock_template_model("banquet", false);
            template.seats = 12;

            let repo = TableTemplateRepository::new(&test.db);
            let updated = repo.upsert(template).await?;

            assert_eq!(updated.seats, 12);

            Ok(())
        }
    }

    mod delete_custom {
        use aisle_test_utils::prelude::*;

        use crate::server::data::seating::template::TableTemplateRepository;

        /// Expect a custom template to be deleted
        #[tokio::test]
        async fn deletes_custom_template() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_template("banquet", false)
                .build()
                .await?;

            let repo = TableTemplateRepository::new(&test.db);
            let result = repo.delete_custom("banquet").await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repo.get("banquet").await?.is_none());

            Ok(())
        }

        /// Expect a predefined template to be left in place
        #[tokio::test]
        async fn leaves_predefined_template() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_template("round-60", true)
                .build()
                .await?;

            let repo = TableTemplateRepository::new(&test.db);
            let result = repo.delete_custom("round-60").await?;

            assert_eq!(result.rows_affected, 0);
            assert!(repo.get("round-60").await?.is_some());

            Ok(())
        }
    }
}
