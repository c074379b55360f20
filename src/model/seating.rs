use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::TableShape;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TableChairDto {
    pub id: i32,
    pub table_id: i32,
    pub guest_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeatingTableDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "circle")]
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub chairs: Vec<TableChairDto>,
}

/// Body for creating a seating table.
///
/// Either `template_id` or all of `shape`, `width` and `length` must be given. Explicit fields
/// override the template's values; `seats` empty chairs are created with the table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateSeatingTableDto {
    pub template_id: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub shape: Option<TableShape>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub seats: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateSeatingTableDto {
    pub name: String,
    #[schema(value_type = String)]
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeatGuestDto {
    pub guest_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TableTemplateDto {
    pub id: String,
    pub name: String,
    #[schema(value_type = String, example = "circle")]
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
    pub seats: i32,
    pub is_predefined: bool,
}

/// Body for creating or replacing a custom table template; the ID comes from the path.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TableTemplateInputDto {
    pub name: String,
    #[schema(value_type = String)]
    pub shape: TableShape,
    pub width: f64,
    pub length: f64,
    pub seats: i32,
}
