use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::vendor::SessionVendorId,
};

/// Retrieves the logged-in vendor ID from the session
///
/// # Returns
/// - `Ok(i32)` - Vendor ID present in session
/// - `Err(Error::AuthError(AuthError::VendorNotInSession))` - No vendor is logged in
/// - `Err(Error)` - Session store errors
pub async fn get_vendor_id_from_session(session: &Session) -> Result<i32, Error> {
    let Some(vendor_id) = SessionVendorId::get(session).await? else {
        return Err(Error::AuthError(AuthError::VendorNotInSession));
    };

    Ok(vendor_id)
}

#[cfg(test)]
mod tests {
    use aisle_test_utils::prelude::*;

    use crate::server::{
        controller::util::vendor_session::get_vendor_id_from_session,
        error::{auth::AuthError, Error},
        model::session::vendor::SessionVendorId,
    };

    /// Expect the vendor ID stored at login
    #[tokio::test]
    async fn returns_vendor_id() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionVendorId::insert(&test.session, 3).await.unwrap();

        let result = get_vendor_id_from_session(&test.session).await;

        assert!(matches!(result, Ok(3)));

        Ok(())
    }

    /// Expect VendorNotInSession for an anonymous session
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_vendor_id_from_session(&test.session).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::VendorNotInSession))
        ));

        Ok(())
    }
}
