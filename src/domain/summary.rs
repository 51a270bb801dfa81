// src/domain/summary.rs

use crate::domain::format::{currency, lookup, lookup_present, plain, thousands, with_unit, NOT_AVAILABLE};
use serde_json::Value;

/// Keys the records API has used for a second owner. Checked in order;
/// either may be missing.
const SECOND_OWNER_KEYS: [&str; 2] = ["owner2", "owner3"];

/// Display-ready view of one property detail record.
///
/// Every field is already a string; anything the API omitted reads "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
    // === Ownership & Location ===
    pub address: String,
    pub owners: String,
    pub apn: String,
    pub subdivision: String,

    // === Valuation & Tax ===
    pub market_value: String,
    pub assessed_value: String,
    pub tax_amount: String,
    pub tax_year: String,

    // === Last Sale ===
    pub sale_price: String,
    pub sale_date: String,

    // === Building ===
    pub property_type: String,
    pub year_built: String,
    pub living_area: String,
    pub beds: String,
    pub baths: String,
}

fn text_at(prop: &Value, path: &[&str]) -> Option<String> {
    lookup_present(prop, path)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First owner's full name, if the record carries one.
pub fn primary_owner(prop: &Value) -> Option<String> {
    text_at(prop, &["assessment", "owner", "owner1", "fullName"])
}

/// Best-effort second owner. The key moved between API versions, so this
/// may legitimately come back empty.
pub fn secondary_owner(prop: &Value) -> Option<String> {
    SECOND_OWNER_KEYS
        .iter()
        .find_map(|&key| text_at(prop, &["assessment", "owner", key, "fullName"]))
}

/// First entry of the `property` array in a detail response.
pub fn first_property(response: &Value) -> Option<&Value> {
    response.get("property")?.as_array()?.first()
}

impl PropertySummary {
    /// Flattens one entry of a detail response's `property` array.
    pub fn from_property(prop: &Value) -> Self {
        let owners: Vec<String> = [primary_owner(prop), secondary_owner(prop)]
            .into_iter()
            .flatten()
            .collect();

        let living_area = thousands(lookup(prop, &["building", "size", "livingSize"]))
            .map(|s| format!("{s} sq ft"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            address: plain(lookup(prop, &["address", "oneLine"])),
            owners: if owners.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                owners.join(" & ")
            },
            apn: plain(lookup(prop, &["identifier", "apn"])),
            subdivision: plain(lookup(prop, &["area", "subdName"])),

            market_value: currency(lookup(prop, &["assessment", "market", "mktTtlValue"])),
            assessed_value: currency(lookup(prop, &["assessment", "assessed", "assdTtlValue"])),
            tax_amount: currency(lookup(prop, &["assessment", "tax", "taxAmt"])),
            tax_year: plain(lookup(prop, &["assessment", "tax", "taxYear"])),

            sale_price: currency(lookup(prop, &["sale", "saleAmountData", "saleAmt"])),
            sale_date: plain(lookup(prop, &["sale", "saleAmountData", "saleRecDate"])),

            property_type: plain(lookup(prop, &["summary", "propClass"])),
            year_built: plain(lookup(prop, &["summary", "yearBuilt"])),
            living_area,
            beds: with_unit(lookup(prop, &["building", "rooms", "beds"]), "Bed"),
            baths: with_unit(lookup(prop, &["building", "rooms", "bathsTotal"]), "Bath"),
        }
    }

    /// Markdown rendering used by the terminal commands.
    pub fn to_markdown(&self) -> String {
        format!(
            "### Property Details for {address}\n\
             ---\n\
             #### Ownership & Location\n\
             **Owner(s):** {owners}\n\
             **Parcel ID (APN):** {apn}\n\
             **Subdivision:** {subdivision}\n\
             \n\
             #### Valuation & Tax\n\
             **Market Value:** {market}\n\
             **Assessed Value:** {assessed}\n\
             **Last Annual Tax:** {tax} (Tax Year: {tax_year})\n\
             \n\
             #### Last Sale Information\n\
             **Sale Price:** {sale_price}\n\
             **Sale Date:** {sale_date}\n\
             \n\
             #### Building Characteristics\n\
             **Property Type:** {property_type}\n\
             **Year Built:** {year_built}\n\
             **Living Area:** {living_area}\n\
             **Beds / Baths:** {beds} / {baths}",
            address = self.address,
            owners = self.owners,
            apn = self.apn,
            subdivision = self.subdivision,
            market = self.market_value,
            assessed = self.assessed_value,
            tax = self.tax_amount,
            tax_year = self.tax_year,
            sale_price = self.sale_price,
            sale_date = self.sale_date,
            property_type = self.property_type,
            year_built = self.year_built,
            living_area = self.living_area,
            beds = self.beds,
            baths = self.baths,
        )
    }
}

/// Result of a single-address lookup: the rendered summary (if the API
/// matched a property) and the response body exactly as received.
#[derive(Debug, Clone)]
pub struct PropertyLookup {
    pub summary: Option<PropertySummary>,
    pub raw: Value,
}

impl PropertyLookup {
    pub const NOT_FOUND: &'static str = "No property found.";

    pub fn from_response(raw: Value) -> Self {
        let summary = first_property(&raw).map(PropertySummary::from_property);
        Self { summary, raw }
    }

    pub fn summary_text(&self) -> String {
        match &self.summary {
            Some(summary) => summary.to_markdown(),
            None => Self::NOT_FOUND.to_string(),
        }
    }
}
