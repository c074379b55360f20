use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Outline of a seating table as drawn on the seating chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[sea_orm(string_value = "circle")]
    Circle,
    #[sea_orm(string_value = "rectangle")]
    Rectangle,
    #[sea_orm(string_value = "square")]
    Square,
    #[sea_orm(string_value = "oval")]
    Oval,
    #[sea_orm(string_value = "curved")]
    Curved,
}
