use crate::domain::PropertyLookup;
use crate::templates::{card, desktop_layout, field_row};
use maud::{html, Markup};

/// What the user typed into the lookup form, echoed back on the result page.
#[derive(Debug, Default, Clone)]
pub struct AddressForm {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

pub fn address_form(form: &AddressForm) -> Markup {
    html! {
        form class="stack" method="get" action="/property" {
            label for="street" { "Street Address" }
            input id="street" name="street" placeholder="e.g., 4529 Winona Court" value=(form.street) required;
            label for="city" { "City" }
            input id="city" name="city" placeholder="e.g., Denver" value=(form.city) required;
            label for="state" { "State" }
            input id="state" name="state" placeholder="e.g., CO" value=(form.state) required;
            label for="zip" { "ZIP Code" }
            input id="zip" name="zip" placeholder="e.g., 80212" value=(form.zip);
            button type="submit" class="primary" { "Get Property Info" }
        }
    }
}

fn summary_section(lookup: &PropertyLookup) -> Markup {
    let Some(s) = &lookup.summary else {
        return html! { p class="status" { (PropertyLookup::NOT_FOUND) } };
    };

    html! {
        h2 { "Property Details for " (s.address) }

        h3 { "Ownership & Location" }
        dl class="fields" {
            (field_row("Owner(s)", &s.owners))
            (field_row("Parcel ID (APN)", &s.apn))
            (field_row("Subdivision", &s.subdivision))
        }

        h3 { "Valuation & Tax" }
        dl class="fields" {
            (field_row("Market Value", &s.market_value))
            (field_row("Assessed Value", &s.assessed_value))
            (field_row("Last Annual Tax", &format!("{} (Tax Year: {})", s.tax_amount, s.tax_year)))
        }

        h3 { "Last Sale Information" }
        dl class="fields" {
            (field_row("Sale Price", &s.sale_price))
            (field_row("Sale Date", &s.sale_date))
        }

        h3 { "Building Characteristics" }
        dl class="fields" {
            (field_row("Property Type", &s.property_type))
            (field_row("Year Built", &s.year_built))
            (field_row("Living Area", &s.living_area))
            (field_row("Beds / Baths", &format!("{} / {}", s.beds, s.baths)))
        }
    }
}

pub fn property_page(form: &AddressForm, lookup: &PropertyLookup) -> Markup {
    let raw = serde_json::to_string_pretty(&lookup.raw).unwrap_or_else(|_| lookup.raw.to_string());

    desktop_layout(
        "Property Details",
        html! {
            main class="container" {
                (card("Property Detail Lookup", address_form(form)))

                section class="card" id="summary" {
                    (summary_section(lookup))
                }

                section class="card" {
                    details {
                        summary { "Full JSON Response" }
                        pre class="json" { (raw) }
                    }
                }
            }
        },
    )
}
