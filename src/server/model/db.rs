//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the server.

/// A signed-in planner's profile, keyed by the auth provider's user ID.
pub type ProfileModel = entity::profile::Model;

/// A guest on a planner's list.
pub type GuestModel = entity::guest::Model;

/// A table placed on a planner's seating chart.
///
/// # Fields (from `entity::seating_table::Model`)
/// - `id` - Primary key
/// - `name` - Display name, e.g. "Head Table"
/// - `shape` - Outline used when drawing the table
/// - `width` / `length` - Positive dimensions in inches
/// - `created_by` - Owning profile
pub type SeatingTableModel = entity::seating_table::Model;

/// A chair belonging to one seating table, optionally holding one guest.
pub type TableChairModel = entity::table_chair::Model;

/// A reusable table layout, predefined or custom.
pub type TableTemplateModel = entity::table_template::Model;

/// A vendor directory listing.
pub type VendorModel = entity::vendor::Model;

/// A vendor directory category.
pub type VendorCategoryModel = entity::vendor_category::Model;
