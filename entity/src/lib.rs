pub mod prelude;

pub mod guest;
pub mod profile;
pub mod sea_orm_active_enums;
pub mod seating_table;
pub mod table_chair;
pub mod table_template;
pub mod vendor;
pub mod vendor_access_token;
pub mod vendor_category;
