//! Factory functions for generating in-memory database models.

use entity::sea_orm_active_enums::TableShape;

/// Create a round 60" eight-seat template model without touching the database.
pub fn mock_template_model(id: &str, is_predefined: bool) -> entity::table_template::Model {
    entity::table_template::Model {
        id: id.to_string(),
        name: "Round Table (60\")".to_string(),
        shape: TableShape::Circle,
        width: 60.0,
        length: 60.0,
        seats: 8,
        is_predefined,
    }
}
