// templates/pages/home.rs

use crate::templates::pages::property::{address_form, AddressForm};
use crate::templates::pages::zip_analysis::zip_form;
use crate::templates::{card, desktop_layout, disclaimer};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Property Data Explorer" }
                p { "Look up a single property, or sample a ZIP code and estimate the likely origin of its owners' names." }

                (card("Property Detail Lookup", address_form(&AddressForm::default())))

                (card("ZIP Code Demographic Analysis", html! {
                    p {
                        "Enter a ZIP code. The app fetches a sample of single-family residences, "
                        "finds their owners and classifies the owner names."
                    }
                    (disclaimer())
                    (zip_form(""))
                }))
            }
        },
    )
}
