use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::profile::{ProfileDto, UpsertProfileDto},
    server::{
        data::profile::ProfileRepository,
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::ProfileModel,
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<ProfileDto, Error> {
        let profile = ProfileRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Profile", user_id))?;

        Ok(profile_to_dto(profile))
    }

    /// Creates or updates the profile of the acting user
    pub async fn upsert(
        &self,
        user_id: Uuid,
        request: UpsertProfileDto,
    ) -> Result<ProfileDto, Error> {
        let email = request.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }

        let profile = ProfileRepository::new(self.db)
            .upsert(
                user_id,
                email,
                request.first_name,
                request.last_name,
                request.wedding_date,
            )
            .await?;

        Ok(profile_to_dto(profile))
    }
}

fn profile_to_dto(profile: ProfileModel) -> ProfileDto {
    ProfileDto {
        id: profile.id,
        email: profile.email,
        first_name: profile.first_name,
        last_name: profile.last_name,
        wedding_date: profile.wedding_date,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }
}
