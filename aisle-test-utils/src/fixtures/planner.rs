//! Planner-side fixtures: profiles, guests and seating chart rows.

use chrono::Utc;
use entity::sea_orm_active_enums::TableShape;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn planner<'a>(&'a self) -> PlannerFixtures<'a> {
        PlannerFixtures { setup: self }
    }
}

pub struct PlannerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlannerFixtures<'a> {
    /// Insert a profile with a placeholder email derived from the user ID.
    pub async fn insert_profile(&self, user_id: Uuid) -> Result<entity::profile::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                id: ActiveValue::Set(user_id),
                email: ActiveValue::Set(format!("{}@example.com", user_id.simple())),
                first_name: ActiveValue::Set(Some("Test".to_string())),
                last_name: ActiveValue::Set(Some("Planner".to_string())),
                wedding_date: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a guest owned by `user_id`, optionally assigned to a table.
    pub async fn insert_guest(
        &self,
        user_id: Uuid,
        first_name: &str,
        last_name: &str,
        table_id: Option<i32>,
    ) -> Result<entity::guest::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Guest::insert(entity::guest::ActiveModel {
                first_name: ActiveValue::Set(first_name.to_string()),
                last_name: ActiveValue::Set(last_name.to_string()),
                address_line1: ActiveValue::Set(None),
                address_line2: ActiveValue::Set(None),
                city: ActiveValue::Set(None),
                state: ActiveValue::Set(None),
                postal_code: ActiveValue::Set(None),
                country: ActiveValue::Set(None),
                email: ActiveValue::Set(None),
                table_id: ActiveValue::Set(table_id),
                created_by: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a 60" round seating table owned by `user_id`.
    pub async fn insert_seating_table(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<entity::seating_table::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::SeatingTable::insert(entity::seating_table::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                shape: ActiveValue::Set(TableShape::Circle),
                width: ActiveValue::Set(60.0),
                length: ActiveValue::Set(60.0),
                created_by: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a chair on `table_id`, optionally holding a guest.
    pub async fn insert_chair(
        &self,
        user_id: Uuid,
        table_id: i32,
        guest_id: Option<i32>,
    ) -> Result<entity::table_chair::Model, TestError> {
        Ok(
            entity::prelude::TableChair::insert(entity::table_chair::ActiveModel {
                table_id: ActiveValue::Set(table_id),
                guest_id: ActiveValue::Set(guest_id),
                created_by: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a seating table holding `chairs` empty chairs.
    pub async fn insert_table_with_chairs(
        &self,
        user_id: Uuid,
        name: &str,
        chairs: usize,
    ) -> Result<
        (
            entity::seating_table::Model,
            Vec<entity::table_chair::Model>,
        ),
        TestError,
    > {
        let table = self.insert_seating_table(user_id, name).await?;

        let mut chair_models = Vec::with_capacity(chairs);
        for _ in 0..chairs {
            chair_models.push(self.insert_chair(user_id, table.id, None).await?);
        }

        Ok((table, chair_models))
    }

    /// Insert a round 60" eight-seat table template.
    pub async fn insert_template(
        &self,
        id: &str,
        is_predefined: bool,
    ) -> Result<entity::table_template::Model, TestError> {
        let template = factory::mock_template_model(id, is_predefined);

        Ok(
            entity::prelude::TableTemplate::insert(entity::table_template::ActiveModel {
                id: ActiveValue::Set(template.id),
                name: ActiveValue::Set(template.name),
                shape: ActiveValue::Set(template.shape),
                width: ActiveValue::Set(template.width),
                length: ActiveValue::Set(template.length),
                seats: ActiveValue::Set(template.seats),
                is_predefined: ActiveValue::Set(template.is_predefined),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
