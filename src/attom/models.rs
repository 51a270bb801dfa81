use serde::{Deserialize, Deserializer};
use serde_json::Value;

// response
//  ├── status
//  │    ├── code
//  │    ├── msg
//  │    └── total
//  └── property[]
//       ├── identifier
//       │    └── attomId
//       └── address
//            ├── line1
//            ├── line2
//            ├── locality
//            ├── countrySubd
//            ├── postal1
//            └── oneLine
//
// Only the listing's addresses are typed. `status` and `identifier` are kept
// loose since nothing reads them, and detail documents stay
// `serde_json::Value` because their shape drifts between endpoint versions.

#[derive(Debug, Default, Deserialize)]
pub struct AddressListing {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub property: Option<Vec<ListedProperty>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListedProperty {
    #[serde(default)]
    pub identifier: Option<Value>,
    pub address: Option<ListedAddress>,
}

/// A `property` value that is not an array reads as absent. An entry that
/// does not fit `ListedProperty` becomes an entry without an address, so it
/// still counts toward the sample but is never looked up.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Option<Vec<ListedProperty>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let entries = items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "malformed listing entry; keeping it without an address");
                ListedProperty::default()
            })
        })
        .collect();

    Ok(Some(entries))
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListedAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub locality: Option<String>,
    #[serde(rename = "countrySubd")]
    pub country_subd: Option<String>,
    pub postal1: Option<String>,
    #[serde(rename = "oneLine")]
    pub one_line: Option<String>,
}

impl ListedAddress {
    /// Street line, falling back to nothing when the API left it blank.
    pub fn street(&self) -> Option<&str> {
        self.line1.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Human-readable single line, built from the parts when `oneLine` is absent.
    pub fn display_line(&self) -> String {
        if let Some(one_line) = self.one_line.as_deref().filter(|s| !s.is_empty()) {
            return one_line.to_string();
        }

        let parts: Vec<&str> = [
            self.line1.as_deref(),
            self.locality.as_deref(),
            self.country_subd.as_deref(),
            self.postal1.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();

        parts.join(", ")
    }
}
