use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VendorCategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// A vendor listing joined with its category.
///
/// Legacy credential columns are never part of this shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VendorDto {
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub category_id: Option<i32>,
    pub category: Option<VendorCategoryDto>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub contact_info: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub social_media: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub pricing_details: Option<Value>,
    #[schema(value_type = Vec<Object>)]
    pub gallery_images: Value,
    #[schema(value_type = Option<Object>)]
    pub availability: Option<Value>,
    #[schema(value_type = Vec<Object>)]
    pub services_offered: Value,
    #[schema(value_type = Vec<Object>)]
    pub amenities: Value,
    #[schema(value_type = Vec<Object>)]
    pub faq: Value,
    pub is_featured: bool,
    pub is_hidden: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Listing fields a logged-in vendor may change on its own entry.
///
/// Absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateVendorListingDto {
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub contact_info: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub social_media: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub pricing_details: Option<Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub gallery_images: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub availability: Option<Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub services_offered: Option<Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub amenities: Option<Value>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub faq: Option<Value>,
}
