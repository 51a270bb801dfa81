// client.rs
use crate::attom::{AddressListing, ApiError, PropertySource};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.gateway.attomdata.com/propertyapi/v1.0.0";

/// Which per-address endpoint answers detail lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DetailEndpoint {
    Basicprofile,
    Detail,
}

impl DetailEndpoint {
    fn path(self) -> &'static str {
        match self {
            DetailEndpoint::Basicprofile => "property/basicprofile",
            DetailEndpoint::Detail => "property/detail",
        }
    }
}

/// How an address is spelled out in the query string.
///
/// The API accepts either form; a request carries exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AddressStyle {
    /// `address1=<street>&address2=<city, state[ zip]>`
    Split,
    /// `address=<street, city, state[ zip]>`
    OneLine,
}

#[derive(Debug, Clone)]
pub struct AttomSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub detail_endpoint: DetailEndpoint,
    pub address_style: AddressStyle,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for AttomSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            detail_endpoint: DetailEndpoint::Basicprofile,
            address_style: AddressStyle::Split,
            page_size: 100,
            timeout: Duration::from_secs(15),
        }
    }
}

pub struct AttomClient {
    client: Client,
    settings: AttomSettings,
}

impl AttomClient {
    pub fn new(settings: AttomSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_ok()
    }

    fn api_key(&self) -> Result<&str, ApiError> {
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ApiError::MissingApiKey)
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Query parameters naming one address, in the configured style.
    pub fn address_params(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zip_code: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut locality = format!("{city}, {state}");
        if let Some(zip) = zip_code.map(str::trim).filter(|z| !z.is_empty()) {
            locality.push(' ');
            locality.push_str(zip);
        }

        match self.settings.address_style {
            AddressStyle::Split => vec![("address1", street.to_string()), ("address2", locality)],
            AddressStyle::OneLine => vec![("address", format!("{street}, {locality}"))],
        }
    }

    fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        // Checked before anything touches the network.
        let api_key = self.api_key()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(api_key).map_err(|_| ApiError::MissingApiKey)?,
        );

        let resp = self
            .client
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, url, "records API returned an error");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PropertySource for AttomClient {
    fn addresses_by_zip(&self, zip_code: &str) -> Result<AddressListing, ApiError> {
        let url = self.endpoint_url("property/address");
        let params = [
            ("postalcode", zip_code.trim().to_string()),
            ("propertytype", "SFR".to_string()),
            ("pagesize", self.settings.page_size.to_string()),
        ];

        let data = self.get_json(&url, &params)?;
        // A body that is not a listing at all reads as "no addresses".
        Ok(serde_json::from_value(data).unwrap_or_else(|e| {
            tracing::warn!(error = %e, zip_code, "unexpected listing response shape");
            AddressListing::default()
        }))
    }

    fn property_detail(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zip_code: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint_url(self.settings.detail_endpoint.path());
        let params = self.address_params(street, city, state, zip_code);
        self.get_json(&url, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(style: AddressStyle) -> AttomClient {
        AttomClient::new(AttomSettings {
            address_style: style,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn split_style_uses_two_params() {
        let params = client(AddressStyle::Split).address_params(
            "4529 Winona Court",
            "Denver",
            "CO",
            Some("80212"),
        );
        assert_eq!(
            params,
            vec![
                ("address1", "4529 Winona Court".to_string()),
                ("address2", "Denver, CO 80212".to_string()),
            ]
        );
    }

    #[test]
    fn one_line_style_uses_single_param() {
        let params =
            client(AddressStyle::OneLine).address_params("4529 Winona Court", "Denver", "CO", None);
        assert_eq!(
            params,
            vec![("address", "4529 Winona Court, Denver, CO".to_string())]
        );
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        // The base URL is unroutable; reaching the network would surface as Network.
        let client = AttomClient::new(AttomSettings {
            base_url: "http://127.0.0.1:9".into(),
            api_key: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();

        assert!(!client.has_api_key());
        let err = client.addresses_by_zip("80212").unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));

        let err = client
            .property_detail("1 Main St", "Denver", "CO", None)
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey));
    }

    #[test]
    fn endpoint_paths() {
        let client = AttomClient::new(AttomSettings {
            base_url: "https://example.test/api/".into(),
            detail_endpoint: DetailEndpoint::Detail,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint_url(client.settings.detail_endpoint.path()),
            "https://example.test/api/property/detail"
        );
    }
}
