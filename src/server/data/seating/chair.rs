use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};
use uuid::Uuid;

pub struct TableChairRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableChairRepository<'a, C> {
    /// Creates a new instance of [`TableChairRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates `count` empty chairs on a table
    ///
    /// Returns the created chairs ordered by ID. Creating zero chairs is a no-op.
    pub async fn create_many(
        &self,
        user_id: Uuid,
        table_id: i32,
        count: usize,
    ) -> Result<Vec<entity::table_chair::Model>, DbErr> {
        let mut chairs = Vec::with_capacity(count);

        for _ in 0..count {
            chairs.push(self.create(user_id, table_id).await?);
        }

        Ok(chairs)
    }

    /// Creates one empty chair on a table
    pub async fn create(
        &self,
        user_id: Uuid,
        table_id: i32,
    ) -> Result<entity::table_chair::Model, DbErr> {
        let chair = entity::table_chair::ActiveModel {
            table_id: ActiveValue::Set(table_id),
            guest_id: ActiveValue::Set(None),
            created_by: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        chair.insert(self.db).await
    }

    /// Gets a chair if it exists and belongs to `user_id`
    pub async fn get(
        &self,
        user_id: Uuid,
        chair_id: i32,
    ) -> Result<Option<entity::table_chair::Model>, DbErr> {
        entity::prelude::TableChair::find_by_id(chair_id)
            .filter(entity::table_chair::Column::CreatedBy.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets the chairs of the provided tables ordered by table then chair ID
    pub async fn get_by_table_ids(
        &self,
        table_ids: Vec<i32>,
    ) -> Result<Vec<entity::table_chair::Model>, DbErr> {
        if table_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TableChair::find()
            .filter(entity::table_chair::Column::TableId.is_in(table_ids))
            .order_by_asc(entity::table_chair::Column::TableId)
            .order_by_asc(entity::table_chair::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every chair of `user_id` currently holding the guest
    pub async fn get_by_guest_id(
        &self,
        user_id: Uuid,
        guest_id: i32,
    ) -> Result<Vec<entity::table_chair::Model>, DbErr> {
        entity::prelude::TableChair::find()
            .filter(entity::table_chair::Column::CreatedBy.eq(user_id))
            .filter(entity::table_chair::Column::GuestId.eq(guest_id))
            .order_by_asc(entity::table_chair::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets or clears the guest sitting on a chair
    ///
    /// Returns `Ok(None)` if the chair does not exist or belongs to another user.
    pub async fn set_guest(
        &self,
        user_id: Uuid,
        chair_id: i32,
        guest_id: Option<i32>,
    ) -> Result<Option<entity::table_chair::Model>, DbErr> {
        let chair = match self.get(user_id, chair_id).await? {
            Some(chair) => chair,
            None => return Ok(None),
        };

        let mut chair_am = chair.into_active_model();
        chair_am.guest_id = ActiveValue::Set(guest_id);

        let chair = chair_am.update(self.db).await?;

        Ok(Some(chair))
    }

    /// Clears the guest from every chair of `user_id` holding it
    pub async fn clear_guest(&self, user_id: Uuid, guest_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::TableChair::update_many()
            .col_expr(
                entity::table_chair::Column::GuestId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::table_chair::Column::CreatedBy.eq(user_id))
            .filter(entity::table_chair::Column::GuestId.eq(guest_id))
            .exec(self.db)
            .await
    }

    /// Deletes a chair
    ///
    /// Returns OK regardless of the chair existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: Uuid, chair_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TableChair::delete_many()
            .filter(entity::table_chair::Column::Id.eq(chair_id))
            .filter(entity::table_chair::Column::CreatedBy.eq(user_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_many {
        use aisle_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::seating::chair::TableChairRepository;

        /// Expect the requested number of empty chairs
        #[tokio::test]
        async fn creates_empty_chairs() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let table = test.planner().insert_seating_table(user_id, "Table 1").await?;

            let repo = TableChairRepository::new(&test.db);
            let chairs = repo.create_many(user_id, table.id, 8).await?;

            assert_eq!(chairs.len(), 8);
            assert!(chairs.iter().all(|c| c.guest_id.is_none() && c.table_id == table.id));

            Ok(())
        }

        /// Expect Error when the table does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_table() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let result = repo.create_many(user_id, 42, 1).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_table_ids {
        use aisle_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::seating::chair::TableChairRepository;

        /// Expect chairs of the requested tables only
        #[tokio::test]
        async fn returns_chairs_of_requested_tables() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let (table_one, _) = test
                .planner()
                .insert_table_with_chairs(user_id, "Table 1", 2)
                .await?;
            test.planner()
                .insert_table_with_chairs(user_id, "Table 2", 3)
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let chairs = repo.get_by_table_ids(vec![table_one.id]).await?;

            assert_eq!(chairs.len(), 2);
            assert!(chairs.iter().all(|c| c.table_id == table_one.id));

            Ok(())
        }

        /// Expect an empty list without querying for no table IDs
        #[tokio::test]
        async fn returns_empty_for_no_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let repo = TableChairRepository::new(&test.db);
            let chairs = repo.get_by_table_ids(Vec::new()).await?;

            assert!(chairs.is_empty());

            Ok(())
        }
    }

    mod set_guest {
        use aisle_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::seating::chair::TableChairRepository;

        /// Expect the guest to be stored on the chair
        #[tokio::test]
        async fn seats_guest() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let (_, chairs) = test
                .planner()
                .insert_table_with_chairs(user_id, "Table 1", 1)
                .await?;
            let guest = test
                .planner()
                .insert_guest(user_id, "Ada", "Lovelace", None)
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let chair = repo
                .set_guest(user_id, chairs[0].id, Some(guest.id))
                .await?
                .expect("chair should exist");

            assert_eq!(chair.guest_id, Some(guest.id));

            Ok(())
        }

        /// Expect Ok(None) for another user's chair
        #[tokio::test]
        async fn returns_none_for_other_user() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let (_, chairs) = test
                .planner()
                .insert_table_with_chairs(user_id, "Table 1", 1)
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let result = repo.set_guest(Uuid::new_v4(), chairs[0].id, None).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod clear_guest {
        use aisle_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::seating::chair::TableChairRepository;

        /// Expect every chair holding the guest to be emptied
        #[tokio::test]
        async fn clears_all_chairs_of_guest() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let table = test.planner().insert_seating_table(user_id, "Table 1").await?;
            let guest = test
                .planner()
                .insert_guest(user_id, "Ada", "Lovelace", None)
                .await?;
            test.planner()
                .insert_chair(user_id, table.id, Some(guest.id))
                .await?;
            test.planner()
                .insert_chair(user_id, table.id, Some(guest.id))
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let result = repo.clear_guest(user_id, guest.id).await?;

            assert_eq!(result.rows_affected, 2);
            assert!(repo.get_by_guest_id(user_id, guest.id).await?.is_empty());

            Ok(())
        }
    }

    mod delete {
        use aisle_test_utils::prelude::*;
        use uuid::Uuid;

        use crate::server::data::seating::chair::TableChairRepository;

        /// Expect one row affected when deleting an owned chair
        #[tokio::test]
        async fn deletes_owned_chair() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let (_, chairs) = test
                .planner()
                .insert_table_with_chairs(user_id, "Table 1", 1)
                .await?;

            let repo = TableChairRepository::new(&test.db);
            let result = repo.delete(user_id, chairs[0].id).await?;

            assert_eq!(result.rows_affected, 1);

            Ok(())
        }
    }
}
