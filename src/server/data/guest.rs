use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Contact and seating fields written on guest create and update.
#[derive(Clone, Debug, Default)]
pub struct GuestFields {
    pub first_name: String,
    pub last_name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub table_id: Option<i32>,
}

pub struct GuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuestRepository<'a, C> {
    /// Creates a new instance of [`GuestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        fields: GuestFields,
    ) -> Result<entity::guest::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let guest = entity::guest::ActiveModel {
            first_name: ActiveValue::Set(fields.first_name),
            last_name: ActiveValue::Set(fields.last_name),
            address_line1: ActiveValue::Set(fields.address_line1),
            address_line2: ActiveValue::Set(fields.address_line2),
            city: ActiveValue::Set(fields.city),
            state: ActiveValue::Set(fields.state),
            postal_code: ActiveValue::Set(fields.postal_code),
            country: ActiveValue::Set(fields.country),
            email: ActiveValue::Set(fields.email),
            table_id: ActiveValue::Set(fields.table_id),
            created_by: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        guest.insert(self.db).await
    }

    /// Gets a guest if it exists and belongs to `user_id`
    pub async fn get(
        &self,
        user_id: Uuid,
        guest_id: i32,
    ) -> Result<Option<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find_by_id(guest_id)
            .filter(entity::guest::Column::CreatedBy.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets all guests of `user_id` ordered by last name then first name
    pub async fn get_many(&self, user_id: Uuid) -> Result<Vec<entity::guest::Model>, DbErr> {
        entity::prelude::Guest::find()
            .filter(entity::guest::Column::CreatedBy.eq(user_id))
            .order_by_asc(entity::guest::Column::LastName)
            .order_by_asc(entity::guest::Column::FirstName)
            .order_by_asc(entity::guest::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every editable field of a guest
    ///
    /// Returns `Ok(None)` if the guest does not exist or belongs to another user.
    pub async fn update(
        &self,
        user_id: Uuid,
        guest_id: i32,
        fields: GuestFields,
    ) -> Result<Option<entity::guest::Model>, DbErr> {
        let guest = match self.get(user_id, guest_id).await? {
            Some(guest) => guest,
            None => return Ok(None),
        };

        let mut guest_am = guest.into_active_model();
        guest_am.first_name = ActiveValue::Set(fields.first_name);
        guest_am.last_name = ActiveValue::Set(fields.last_name);
        guest_am.address_line1 = ActiveValue::Set(fields.address_line1);
        guest_am.address_line2 = ActiveValue::Set(fields.address_line2);
        guest_am.city = ActiveValue::Set(fields.city);
        guest_am.state = ActiveValue::Set(fields.state);
        guest_am.postal_code = ActiveValue::Set(fields.postal_code);
        guest_am.country = ActiveValue::Set(fields.country);
        guest_am.email = ActiveValue::Set(fields.email);
        guest_am.table_id = ActiveValue::Set(fields.table_id);
        guest_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let guest = guest_am.update(self.db).await?;

        Ok(Some(guest))
    }

    /// Sets the table a guest is assigned to
    ///
    /// Returns `Ok(None)` if the guest does not exist or belongs to another user.
    pub async fn set_table(
        &self,
        user_id: Uuid,
        guest_id: i32,
        table_id: Option<i32>,
    ) -> Result<Option<entity::guest::Model>, DbErr> {
        let guest = match self.get(user_id, guest_id).await? {
            Some(guest) => guest,
            None => return Ok(None),
        };

        let mut guest_am = guest.into_active_model();
        guest_am.table_id = ActiveValue::Set(table_id);
        guest_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let guest = guest_am.update(self.db).await?;

        Ok(Some(guest))
    }

    /// Deletes a guest
    ///
    /// Returns OK regardless of the guest existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: Uuid, guest_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Guest::delete_many()
            .filter(entity::guest::Column::Id.eq(guest_id))
            .filter(entity::guest::Column::CreatedBy.eq(user_id))
            .exec(self.db)
            .await
    }
}
