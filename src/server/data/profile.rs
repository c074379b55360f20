use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};
use uuid::Uuid;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(user_id).one(self.db).await
    }

    /// Creates the profile of `user_id` or updates it in place
    ///
    /// `created_at` is only written on the initial insert.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        wedding_date: Option<NaiveDate>,
    ) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Profile::insert(entity::profile::ActiveModel {
            id: ActiveValue::Set(user_id),
            email: ActiveValue::Set(email),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            wedding_date: ActiveValue::Set(wedding_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::profile::Column::Id)
                .update_columns([
                    entity::profile::Column::Email,
                    entity::profile::Column::FirstName,
                    entity::profile::Column::LastName,
                    entity::profile::Column::WeddingDate,
                    entity::profile::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}

#[cfg(test)]
mod tests {
    mod upsert {
        use aisle_test_utils::prelude::*;
        use chrono::NaiveDate;
        use sea_orm::{EntityTrait, PaginatorTrait};
        use uuid::Uuid;

        use crate::server::data::profile::ProfileRepository;

        /// Expect a new profile to be created
        #[tokio::test]
        async fn creates_profile() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new().with_wedding_tables().build().await?;

            let repo = ProfileRepository::new(&test.db);
            let profile = repo
                .upsert(
                    user_id,
                    "planner@example.com".to_string(),
                    Some("Ada".to_string()),
                    None,
                    NaiveDate::from_ymd_opt(2027, 6, 12),
                )
                .await?;

            assert_eq!(profile.id, user_id);
            assert_eq!(profile.wedding_date, NaiveDate::from_ymd_opt(2027, 6, 12));

            Ok(())
        }

        /// Expect an existing profile to be updated without creating a second row
        #[tokio::test]
        async fn updates_existing_profile() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_wedding_tables()
                .with_profile(user_id)
                .build()
                .await?;
            let original = ProfileRepository::new(&test.db)
                .get(user_id)
                .await?
                .expect("profile should exist");

            let repo = ProfileRepository::new(&test.db);
            let profile = repo
                .upsert(user_id, "new@example.com".to_string(), None, None, None)
                .await?;

            let count = entity::prelude::Profile::find().count(&test.db).await?;

            assert_eq!(count, 1);
            assert_eq!(profile.email, "new@example.com");
            assert_eq!(profile.created_at, original.created_at);

            Ok(())
        }
    }
}
