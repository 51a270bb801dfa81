use crate::attom::PropertySource;
use crate::classifier::{EnsembleClassifier, NameClassifier};
use crate::errors::ServerError;
use crate::pipeline::{analyze_zip, lookup_property, ZipAnalysis};
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::export_analysis_xlsx;
use crate::templates;
use crate::templates::pages::AddressForm;
use astra::Request;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-wide handles, built once in `main` and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<dyn PropertySource>,
    pub classifier: Arc<dyn NameClassifier>,
    pub ensemble: EnsembleClassifier,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/property") => property_lookup(state, &params),
        ("GET", "/zip") => zip_analysis(state, &params),
        ("GET", "/zip/export") => zip_export(state, &params),
        ("GET", "/compare") => compare(state, &params),
        _ => Err(ServerError::NotFound),
    }
}

fn param(params: &HashMap<String, String>, key: &str) -> String {
    params
        .get(key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn property_lookup(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let form = AddressForm {
        street: param(params, "street"),
        city: param(params, "city"),
        state: param(params, "state"),
        zip: param(params, "zip"),
    };

    if form.street.is_empty() || form.city.is_empty() || form.state.is_empty() {
        return Err(ServerError::BadRequest(
            "Street, City, and State are required.".into(),
        ));
    }

    let zip = Some(form.zip.as_str()).filter(|z| !z.is_empty());
    let lookup = lookup_property(
        state.properties.as_ref(),
        &form.street,
        &form.city,
        &form.state,
        zip,
    )?;

    html_response(templates::pages::property_page(&form, &lookup))
}

fn required_zip(params: &HashMap<String, String>) -> Result<String, ServerError> {
    let zip = param(params, "zip");
    if zip.is_empty() {
        return Err(ServerError::BadRequest("A ZIP code is required.".into()));
    }
    Ok(zip)
}

fn run_analysis(state: &AppState, zip: &str) -> Result<ZipAnalysis, ServerError> {
    let analysis = analyze_zip(
        state.properties.as_ref(),
        state.classifier.as_ref(),
        zip,
        |p| {
            tracing::debug!(
                done = p.done,
                total = p.total,
                fraction = p.fraction(),
                "{}",
                p.message
            )
        },
    )?;
    Ok(analysis)
}

fn zip_analysis(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let zip = required_zip(params)?;
    let analysis = run_analysis(state, &zip)?;
    html_response(templates::pages::zip_analysis_page(&zip, &analysis))
}

fn zip_export(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let zip = required_zip(params)?;
    let analysis = run_analysis(state, &zip)?;

    match analysis.report() {
        Some(report) => export_analysis_xlsx(report),
        None => Err(ServerError::BadRequest(analysis.status_text())),
    }
}

/// Names from the comparison form: one per line, blanks dropped.
fn split_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn compare(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let raw = params.get("names").cloned().unwrap_or_default();
    let names = split_names(&raw);
    let records = state.ensemble.compare(&names);
    let strategies = state.ensemble.strategies();

    html_response(templates::pages::compare_page(&raw, &strategies, &records))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_names_per_line() {
        assert_eq!(
            split_names("Maria Garcia\r\n\n  Li Wei  \n"),
            vec!["Maria Garcia", "Li Wei"]
        );
        assert!(split_names("").is_empty());
    }
}
