use crate::pipeline::ZipAnalysis;
use crate::templates::{card, desktop_layout, disclaimer, pie_chart};
use maud::{html, Markup};

pub fn zip_form(zip: &str) -> Markup {
    html! {
        form class="stack" method="get" action="/zip" {
            label for="zip-code" { "Enter a ZIP Code" }
            input id="zip-code" name="zip" placeholder="e.g., 82009" value=(zip) required;
            button type="submit" class="primary" { "Analyze ZIP Code" }
        }
    }
}

fn export_href(zip: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("zip", zip)
        .finish();
    format!("/zip/export?{query}")
}

pub fn zip_analysis_page(zip: &str, analysis: &ZipAnalysis) -> Markup {
    desktop_layout(
        &format!("ZIP {zip}"),
        html! {
            main class="container" {
                (card("ZIP Code Demographic Analysis", html! {
                    (disclaimer())
                    (zip_form(zip))
                }))

                section class="card" {
                    h2 { "Analysis Status" }
                    p class="status" id="status" { (analysis.status_text()) }

                    @if let Some(report) = analysis.report() {
                        p { (report.sampled) " properties sampled, " (report.rows.len()) " owners classified." }
                        (pie_chart(&report.chart))
                        p {
                            a href=(export_href(&report.zip_code)) { "Download sampled data (.xlsx)" }
                        }
                    }
                }

                @if let Some(report) = analysis.report() {
                    (card("Sampled Data and Predictions", html! {
                        table class="data" {
                            thead {
                                tr { th { "Address" } th { "Owner" } th { "Predicted Origin" } }
                            }
                            tbody {
                                @for row in &report.rows {
                                    tr {
                                        td { (row.address) }
                                        td { (row.owner_name) }
                                        td { (row.label) }
                                    }
                                }
                            }
                        }
                    }))
                }
            }
        },
    )
}
