use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub created_by: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::CreatedBy",
        to = "super::profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profile,
    #[sea_orm(
        belongs_to = "super::seating_table::Entity",
        from = "Column::TableId",
        to = "super::seating_table::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    SeatingTable,
    #[sea_orm(has_many = "super::table_chair::Entity")]
    TableChair,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::seating_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatingTable.def()
    }
}

impl Related<super::table_chair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableChair.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
