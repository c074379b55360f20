//! Vendor directory fixtures.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::json;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn vendor<'a>(&'a self) -> VendorFixtures<'a> {
        VendorFixtures { setup: self }
    }
}

pub struct VendorFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> VendorFixtures<'a> {
    pub async fn insert_category(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<entity::vendor_category::Model, TestError> {
        Ok(
            entity::prelude::VendorCategory::insert(entity::vendor_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slug.to_string()),
                icon: ActiveValue::Set(None),
                description: ActiveValue::Set(Some(format!("{} near you", name))),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vendor whose slug is derived from its name.
    pub async fn insert_vendor(
        &self,
        name: &str,
        category_id: Option<i32>,
    ) -> Result<entity::vendor::Model, TestError> {
        let now = Utc::now().naive_utc();
        let slug = name.to_lowercase().replace(' ', "-");

        Ok(
            entity::prelude::Vendor::insert(entity::vendor::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                category_id: ActiveValue::Set(category_id),
                description: ActiveValue::Set(Some(format!("{} description", name))),
                contact_info: ActiveValue::Set(Some(json!({ "email": format!("{}@example.com", slug) }))),
                social_media: ActiveValue::Set(None),
                pricing_details: ActiveValue::Set(None),
                gallery_images: ActiveValue::Set(json!([])),
                availability: ActiveValue::Set(None),
                services_offered: ActiveValue::Set(json!([])),
                amenities: ActiveValue::Set(json!([])),
                faq: ActiveValue::Set(json!([])),
                is_featured: ActiveValue::Set(false),
                is_hidden: ActiveValue::Set(false),
                slug: ActiveValue::Set(Some(slug)),
                username: ActiveValue::Set(None),
                password_hash: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vendor login with a pre-computed password hash.
    pub async fn insert_vendor_with_login(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::vendor::Model, TestError> {
        let vendor = self.insert_vendor(name, None).await?;

        Ok(
            entity::prelude::Vendor::update(entity::vendor::ActiveModel {
                id: ActiveValue::Unchanged(vendor.id),
                username: ActiveValue::Set(Some(username.to_string())),
                password_hash: ActiveValue::Set(Some(password_hash.to_string())),
                ..Default::default()
            })
            .exec(&self.setup.db)
            .await?,
        )
    }

    /// Insert an access token hash for `vendor_id` expiring `expires_in_days` from now.
    pub async fn insert_access_token(
        &self,
        vendor_id: i32,
        token_hash: &str,
        expires_in_days: i64,
    ) -> Result<entity::vendor_access_token::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::VendorAccessToken::insert(
            entity::vendor_access_token::ActiveModel {
                vendor_id: ActiveValue::Set(vendor_id),
                token_hash: ActiveValue::Set(token_hash.to_string()),
                created_at: ActiveValue::Set(now),
                expires_at: ActiveValue::Set(now + Duration::days(expires_in_days)),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
