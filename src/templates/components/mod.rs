use maud::{html, Markup};

pub mod pie_chart;

pub use pie_chart::pie_chart;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One `label: value` pair inside a `dl.fields` list.
pub fn field_row(label: &str, value: &str) -> Markup {
    html! {
        dt { (label) }
        dd { (value) }
    }
}

pub fn disclaimer() -> Markup {
    html! {
        p class="disclaimer" {
            strong { "Ethical disclaimer: " }
            "Predicting national origin from a name is imprecise. The model makes a \
             probabilistic guess and can be wrong. Results are for illustrative, \
             analytical purposes only."
        }
    }
}
