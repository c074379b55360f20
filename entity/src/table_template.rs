use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TableShape;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "table_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
    pub seats: i32,
    pub is_predefined: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
