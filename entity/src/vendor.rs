use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub contact_info: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub social_media: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub pricing_details: Option<Json>,
    #[sea_orm(column_type = "JsonBinary")]
    pub gallery_images: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub availability: Option<Json>,
    #[sea_orm(column_type = "JsonBinary")]
    pub services_offered: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub amenities: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub faq: Json,
    pub is_featured: bool,
    pub is_hidden: bool,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor_category::Entity",
        from = "Column::CategoryId",
        to = "super::vendor_category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    VendorCategory,
    #[sea_orm(has_many = "super::vendor_access_token::Entity")]
    VendorAccessToken,
}

impl Related<super::vendor_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorCategory.def()
    }
}

impl Related<super::vendor_access_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorAccessToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
