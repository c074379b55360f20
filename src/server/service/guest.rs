use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::guest::{GuestDto, GuestInputDto},
    server::{
        data::{
            guest::{GuestFields, GuestRepository},
            profile::ProfileRepository,
            seating::table::SeatingTableRepository,
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::GuestModel,
    },
};

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    /// Creates a new instance of [`GuestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's guests ordered by last name then first name
    pub async fn get_all(&self, user_id: Uuid) -> Result<Vec<GuestDto>, Error> {
        let guests = GuestRepository::new(self.db).get_many(user_id).await?;

        Ok(guests.into_iter().map(guest_to_dto).collect())
    }

    pub async fn get(&self, user_id: Uuid, guest_id: i32) -> Result<GuestDto, Error> {
        let guest = GuestRepository::new(self.db)
            .get(user_id, guest_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Guest", guest_id))?;

        Ok(guest_to_dto(guest))
    }

    /// Adds a guest to the user's list
    ///
    /// # Returns
    /// - `Ok(GuestDto)` - Guest created
    /// - `Err(Error::ValidationError)` - First or last name is empty
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - The user has no profile or
    ///   `table_id` is not one of the user's tables
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn create(&self, user_id: Uuid, request: GuestInputDto) -> Result<GuestDto, Error> {
        let fields = self.validate(user_id, request).await?;

        if ProfileRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(ResourceError::not_found("Profile", user_id).into());
        }

        let guest = GuestRepository::new(self.db).create(user_id, fields).await?;

        Ok(guest_to_dto(guest))
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        guest_id: i32,
        request: GuestInputDto,
    ) -> Result<GuestDto, Error> {
        let fields = self.validate(user_id, request).await?;

        let guest = GuestRepository::new(self.db)
            .update(user_id, guest_id, fields)
            .await?
            .ok_or_else(|| ResourceError::not_found("Guest", guest_id))?;

        Ok(guest_to_dto(guest))
    }

    /// Deletes a guest, any chair the guest sat on is left empty
    pub async fn delete(&self, user_id: Uuid, guest_id: i32) -> Result<(), Error> {
        let result = GuestRepository::new(self.db)
            .delete(user_id, guest_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Guest", guest_id).into());
        }

        Ok(())
    }

    async fn validate(&self, user_id: Uuid, request: GuestInputDto) -> Result<GuestFields, Error> {
        let first_name = request.first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(ValidationError::EmptyField("first_name").into());
        }

        let last_name = request.last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(ValidationError::EmptyField("last_name").into());
        }

        if let Some(table_id) = request.table_id {
            SeatingTableRepository::new(self.db)
                .get(user_id, table_id)
                .await?
                .ok_or_else(|| ResourceError::not_found("Table", table_id))?;
        }

        Ok(GuestFields {
            first_name,
            last_name,
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
            email: request.email,
            table_id: request.table_id,
        })
    }
}

fn guest_to_dto(guest: GuestModel) -> GuestDto {
    GuestDto {
        id: guest.id,
        first_name: guest.first_name,
        last_name: guest.last_name,
        address_line1: guest.address_line1,
        address_line2: guest.address_line2,
        city: guest.city,
        state: guest.state,
        postal_code: guest.postal_code,
        country: guest.country,
        email: guest.email,
        table_id: guest.table_id,
        created_at: guest.created_at,
        updated_at: guest.updated_at,
    }
}
