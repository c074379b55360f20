pub use super::guest::Entity as Guest;
pub use super::profile::Entity as Profile;
pub use super::seating_table::Entity as SeatingTable;
pub use super::table_chair::Entity as TableChair;
pub use super::table_template::Entity as TableTemplate;
pub use super::vendor::Entity as Vendor;
pub use super::vendor_access_token::Entity as VendorAccessToken;
pub use super::vendor_category::Entity as VendorCategory;
