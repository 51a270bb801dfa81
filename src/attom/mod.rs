mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::{AddressStyle, AttomClient, AttomSettings, DetailEndpoint, DEFAULT_BASE_URL};
pub use models::{AddressListing, ListedAddress, ListedProperty};

use serde_json::Value;

/// Anything that can answer the two record queries the app needs.
///
/// `AttomClient` is the real implementation; tests plug in canned responses.
pub trait PropertySource: Send + Sync {
    /// Lists residential properties in a ZIP code.
    fn addresses_by_zip(&self, zip_code: &str) -> Result<AddressListing, ApiError>;

    /// Fetches the detail document for one address, returned verbatim.
    fn property_detail(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zip_code: Option<&str>,
    ) -> Result<Value, ApiError>;
}
