use chrono::{NaiveDateTime, TimeDelta, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::vendor::{UpdateVendorListingDto, VendorDto},
    server::{
        config::MAX_VENDOR_TOKEN_TTL_DAYS,
        data::vendor::{
            access_token::VendorAccessTokenRepository,
            vendor::{VendorListingUpdate, VendorRepository},
        },
        error::{
            auth::AuthError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::db::VendorModel,
        service::vendor::VendorService,
        util::{
            password::{hash_password, verify_password},
            token::{generate_access_token, hash_access_token},
        },
    },
};

/// A newly issued access token in plain text with its expiry.
#[derive(Clone, Debug)]
pub struct IssuedAccessToken {
    pub token: String,
    pub expires_at: NaiveDateTime,
}

pub struct VendorAuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorAuthService<'a> {
    /// Creates a new instance of [`VendorAuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a vendor's username and password
    ///
    /// # Returns
    /// - `Ok(VendorModel)` - Credentials match
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username, no password
    ///   set, or wrong password
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn login(&self, username: &str, password: &str) -> Result<VendorModel, Error> {
        let vendor = VendorRepository::new(self.db)
            .get_by_username(username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_hash = vendor
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(vendor)
    }

    /// Resolves a plain text access token to its vendor
    ///
    /// # Returns
    /// - `Ok(VendorModel)` - Token is known and unexpired
    /// - `Err(Error::AuthError(AuthError::InvalidAccessToken))` - Unknown or expired token
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn login_with_token(&self, token: &str) -> Result<VendorModel, Error> {
        let token_hash = hash_access_token(token.trim());

        let access_token = VendorAccessTokenRepository::new(self.db)
            .find_valid_by_hash(&token_hash, Utc::now().naive_utc())
            .await?
            .ok_or(AuthError::InvalidAccessToken)?;

        let vendor = VendorRepository::new(self.db)
            .get(access_token.vendor_id)
            .await?
            .ok_or(AuthError::InvalidAccessToken)?;

        Ok(vendor)
    }

    /// Issues a new access token for a vendor, revoking every previous one
    ///
    /// Deleting the old tokens and storing the new hash happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(IssuedAccessToken)` - Token stored, previous tokens revoked
    /// - `Err(Error::ValidationError(ValidationError::TokenLifetimeOutOfRange))` - `ttl_days`
    ///   is not between 1 and [`MAX_VENDOR_TOKEN_TTL_DAYS`]
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Vendor does not exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn rotate_access_token(
        &self,
        vendor_id: i32,
        ttl_days: i64,
    ) -> Result<IssuedAccessToken, Error> {
        let expires_at = token_expiry(Utc::now().naive_utc(), ttl_days)?;
        let token = generate_access_token();

        let txn = self.db.begin().await?;

        VendorRepository::new(&txn)
            .get(vendor_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Vendor", vendor_id))?;

        let token_repo = VendorAccessTokenRepository::new(&txn);
        let revoked = token_repo.delete_by_vendor_id(vendor_id).await?;
        token_repo
            .create(vendor_id, hash_access_token(&token), expires_at)
            .await?;

        txn.commit().await?;

        tracing::info!(
            vendor_id,
            revoked = revoked.rows_affected,
            "Rotated vendor access token"
        );

        Ok(IssuedAccessToken { token, expires_at })
    }

    /// Sets the login username and password of a vendor
    pub async fn set_password(
        &self,
        vendor_id: i32,
        username: &str,
        password: &str,
    ) -> Result<VendorModel, Error> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyField("password").into());
        }

        let password_hash = hash_password(password)?;

        let vendor = VendorRepository::new(self.db)
            .set_credentials(vendor_id, username.to_string(), password_hash)
            .await?
            .ok_or_else(|| ResourceError::not_found("Vendor", vendor_id))?;

        Ok(vendor)
    }

    /// Gets the listing of the logged-in vendor
    ///
    /// A session pointing at a vendor that no longer exists is treated as logged out.
    pub async fn get_current(&self, vendor_id: i32) -> Result<VendorDto, Error> {
        match VendorService::new(self.db).get_by_id(vendor_id).await {
            Ok(vendor) => Ok(vendor),
            Err(Error::ResourceError(ResourceError::NotFound { .. })) => {
                Err(AuthError::VendorNotInDatabase(vendor_id).into())
            }
            Err(e) => Err(e),
        }
    }

    /// Applies listing changes made by the logged-in vendor
    pub async fn update_listing(
        &self,
        vendor_id: i32,
        request: UpdateVendorListingDto,
    ) -> Result<VendorDto, Error> {
        for (field, value) in [
            ("gallery_images", &request.gallery_images),
            ("services_offered", &request.services_offered),
            ("amenities", &request.amenities),
            ("faq", &request.faq),
        ] {
            if value.as_ref().is_some_and(|value| !value.is_array()) {
                return Err(ValidationError::NotAList(field).into());
            }
        }

        let listing = VendorListingUpdate {
            description: request.description,
            contact_info: request.contact_info,
            social_media: request.social_media,
            pricing_details: request.pricing_details,
            gallery_images: request.gallery_images,
            availability: request.availability,
            services_offered: request.services_offered,
            amenities: request.amenities,
            faq: request.faq,
        };

        VendorRepository::new(self.db)
            .update_listing(vendor_id, listing)
            .await?
            .ok_or(AuthError::VendorNotInDatabase(vendor_id))?;

        self.get_current(vendor_id).await
    }
}

fn token_expiry(now: NaiveDateTime, ttl_days: i64) -> Result<NaiveDateTime, ValidationError> {
    let out_of_range = || ValidationError::TokenLifetimeOutOfRange {
        value: ttl_days,
        max: MAX_VENDOR_TOKEN_TTL_DAYS,
    };

    if !(1..=MAX_VENDOR_TOKEN_TTL_DAYS).contains(&ttl_days) {
        return Err(out_of_range());
    }

    TimeDelta::try_days(ttl_days)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(out_of_range)
}
