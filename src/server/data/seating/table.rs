use chrono::Utc;
use entity::sea_orm_active_enums::TableShape;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Dimensions and outline of a seating table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableLayout {
    pub name: String,
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
}

pub struct SeatingTableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeatingTableRepository<'a, C> {
    /// Creates a new instance of [`SeatingTableRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new seating table owned by `user_id`
    pub async fn create(
        &self,
        user_id: Uuid,
        layout: TableLayout,
    ) -> Result<entity::seating_table::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let table = entity::seating_table::ActiveModel {
            name: ActiveValue::Set(layout.name),
            shape: ActiveValue::Set(layout.shape),
            width: ActiveValue::Set(layout.width),
            length: ActiveValue::Set(layout.length),
            created_by: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        table.insert(self.db).await
    }

    /// Gets a seating table if it exists and belongs to `user_id`
    pub async fn get(
        &self,
        user_id: Uuid,
        table_id: i32,
    ) -> Result<Option<entity::seating_table::Model>, DbErr> {
        entity::prelude::SeatingTable::find_by_id(table_id)
            .filter(entity::seating_table::Column::CreatedBy.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets all seating tables of `user_id` ordered by ID
    pub async fn get_many(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::seating_table::Model>, DbErr> {
        entity::prelude::SeatingTable::find()
            .filter(entity::seating_table::Column::CreatedBy.eq(user_id))
            .order_by_asc(entity::seating_table::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the layout of a seating table
    ///
    /// Returns `Ok(None)` if the table does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: Uuid,
        table_id: i32,
        layout: TableLayout,
    ) -> Result<Option<entity::seating_table::Model>, DbErr> {
        let table = match self.get(user_id, table_id).await? {
            Some(table) => table,
            None => return Ok(None),
        };

        let mut table_am = table.into_active_model();
        table_am.name = ActiveValue::Set(layout.name);
        table_am.shape = ActiveValue::Set(layout.shape);
        table_am.width = ActiveValue::Set(layout.width);
        table_am.length = ActiveValue::Set(layout.length);
        table_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let table = table_am.update(self.db).await?;

        Ok(Some(table))
    }

    /// Deletes a seating table, its chairs are removed by the foreign key cascade
    ///
    /// Returns OK regardless of the table existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: Uuid, table_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SeatingTable::delete_many()
            .filter(entity::seating_table::Column::Id.eq(table_id))
            .filter(entity::seating_table::Column::CreatedBy.eq(user_id))
            .exec(self.db)
            .await
    }
}
