use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_VENDOR_ID_KEY: &str = "aisle:vendor:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionVendorId(pub String);

impl SessionVendorId {
    /// Insert vendor ID into session
    pub async fn insert(session: &Session, vendor_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_VENDOR_ID_KEY, SessionVendorId(vendor_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get vendor ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionVendorId>(SESSION_VENDOR_ID_KEY)
            .await?
            .map(|SessionVendorId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session vendor id: {}", e))
                })
            })
            .transpose()
    }
}
