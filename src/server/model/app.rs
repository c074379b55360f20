use sea_orm::DatabaseConnection;

use crate::server::config::Config;

const DEFAULT_VENDOR_TOKEN_TTL_DAYS: i64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Lifetime of newly issued vendor access tokens.
    pub vendor_token_ttl_days: i64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            vendor_token_ttl_days: config.vendor_token_ttl_days,
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            vendor_token_ttl_days: DEFAULT_VENDOR_TOKEN_TTL_DAYS,
        }
    }
}
