use crate::classifier::EnsembleRecord;
use crate::templates::{card, desktop_layout, disclaimer};
use maud::{html, Markup};

/// Side-by-side labels from every configured strategy. For comparing the
/// strategies with each other, not for end users.
pub fn compare_page(names_input: &str, strategies: &[&str], records: &[EnsembleRecord]) -> Markup {
    desktop_layout(
        "Compare Classifiers",
        html! {
            main class="container" {
                (card("Compare Classifiers", html! {
                    (disclaimer())
                    form class="stack" method="get" action="/compare" {
                        label for="names" { "Names (one per line)" }
                        textarea id="names" name="names" rows="6" { (names_input) }
                        button type="submit" class="primary" { "Compare" }
                    }
                }))

                @if !records.is_empty() {
                    section class="card" {
                        table class="data" id="comparison" {
                            thead {
                                tr {
                                    th { "Name" }
                                    @for strategy in strategies {
                                        th { (strategy) }
                                    }
                                    th { "Agree" }
                                }
                            }
                            tbody {
                                @for record in records {
                                    tr {
                                        td { (record.name) }
                                        @for strategy in strategies {
                                            td { (record.label_for(strategy).unwrap_or("")) }
                                        }
                                        td { @if record.is_unanimous() { "yes" } @else { "no" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
