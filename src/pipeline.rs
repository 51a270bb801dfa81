// src/pipeline.rs

use crate::attom::{ApiError, PropertySource};
use crate::classifier::NameClassifier;
use crate::domain::summary::{first_property, primary_owner};
use crate::domain::{FrequencyTable, PieChart, PropertyLookup};

/// Incremental progress of one analysis, for whatever is showing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    pub message: String,
}

impl Progress {
    fn new(done: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            done,
            total,
            message: message.into(),
        }
    }

    /// 0.0 ..= 1.0. Before the listing arrives the total is unknown and
    /// nothing is done yet, so that reads as 0.0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

/// One sampled property whose owner made it into the analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerRow {
    pub address: String,
    pub owner_name: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub zip_code: String,
    /// Properties returned by the listing call.
    pub sampled: usize,
    pub rows: Vec<OwnerRow>,
    pub table: FrequencyTable,
    pub chart: PieChart,
}

/// Outcome of a ZIP analysis. Only `Complete` carries a chart.
#[derive(Debug, Clone)]
pub enum ZipAnalysis {
    /// The listing response had no property list at all.
    NoAddresses,
    /// The listing came back with zero properties.
    NoProperties,
    /// Properties were listed but no detail call produced an owner.
    NoOwners { sampled: usize },
    Complete(AnalysisReport),
}

impl ZipAnalysis {
    pub fn status_text(&self) -> String {
        match self {
            ZipAnalysis::NoAddresses => "Could not retrieve addresses for this ZIP code.".to_string(),
            ZipAnalysis::NoProperties => "No properties found for this ZIP code.".to_string(),
            ZipAnalysis::NoOwners { .. } => {
                "No owners found for the sampled addresses (could not retrieve owner names)."
                    .to_string()
            }
            ZipAnalysis::Complete(report) => format!(
                "Analysis complete. Found {} property owners to analyze in the sample.",
                report.rows.len()
            ),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            ZipAnalysis::Complete(report) => Some(report),
            _ => None,
        }
    }
}

pub fn chart_title(zip_code: &str, owners: usize) -> String {
    format!("Predicted Origin Distribution for ZIP Code {zip_code} (Sample of {owners} properties)")
}

/// Lists properties in `zip_code`, looks up each one's owner in turn, then
/// classifies all owners in one batch.
///
/// Only the listing call can fail the run. A detail call that errors or
/// names no owner just drops that property from the sample.
pub fn analyze_zip<F>(
    source: &dyn PropertySource,
    classifier: &dyn NameClassifier,
    zip_code: &str,
    mut progress: F,
) -> Result<ZipAnalysis, ApiError>
where
    F: FnMut(Progress),
{
    let zip_code = zip_code.trim();
    tracing::info!(zip_code, "starting ZIP analysis");

    progress(Progress::new(0, 0, "Fetching address list..."));
    let listing = source.addresses_by_zip(zip_code)?;

    let Some(properties) = listing.property else {
        return Ok(ZipAnalysis::NoAddresses);
    };
    if properties.is_empty() {
        return Ok(ZipAnalysis::NoProperties);
    }

    let total = properties.len();
    let mut owners: Vec<(String, String)> = Vec::new();

    for (i, prop) in properties.iter().enumerate() {
        progress(Progress::new(
            i + 1,
            total,
            format!("Analyzing address {}/{total}...", i + 1),
        ));

        let Some(addr) = prop.address.as_ref() else {
            tracing::debug!(index = i, "listing entry has no address; skipping");
            continue;
        };
        let Some(street) = addr.street() else {
            tracing::debug!(index = i, "listing entry has no street line; skipping");
            continue;
        };

        let detail = source.property_detail(
            street,
            addr.locality.as_deref().unwrap_or_default(),
            addr.country_subd.as_deref().unwrap_or_default(),
            None,
        );

        match detail {
            Ok(doc) => match first_property(&doc).and_then(primary_owner) {
                Some(owner) => owners.push((addr.display_line(), owner)),
                None => tracing::debug!(street, "no owner on record; skipping"),
            },
            Err(e) => tracing::debug!(street, error = %e, "detail lookup failed; skipping"),
        }
    }

    if owners.is_empty() {
        tracing::info!(zip_code, sampled = total, "no owners found");
        return Ok(ZipAnalysis::NoOwners { sampled: total });
    }

    progress(Progress::new(total, total, "Running name analysis..."));
    let names: Vec<String> = owners.iter().map(|(_, name)| name.clone()).collect();
    let labels = classifier.classify(&names);

    let rows: Vec<OwnerRow> = owners
        .into_iter()
        .zip(labels)
        .map(|((address, owner_name), label)| OwnerRow {
            address,
            owner_name,
            label,
        })
        .collect();

    let table = FrequencyTable::tally(rows.iter().map(|r| r.label.as_str()));
    let chart = PieChart::from_table(chart_title(zip_code, rows.len()), &table);

    tracing::info!(
        zip_code,
        sampled = total,
        owners = rows.len(),
        strategy = classifier.strategy(),
        "ZIP analysis complete"
    );

    Ok(ZipAnalysis::Complete(AnalysisReport {
        zip_code: zip_code.to_string(),
        sampled: total,
        rows,
        table,
        chart,
    }))
}

/// Single-address lookup: one detail call, no retry. Errors go straight
/// back to the caller.
pub fn lookup_property(
    source: &dyn PropertySource,
    street: &str,
    city: &str,
    state: &str,
    zip_code: Option<&str>,
) -> Result<PropertyLookup, ApiError> {
    let raw = source.property_detail(street.trim(), city.trim(), state.trim(), zip_code)?;
    Ok(PropertyLookup::from_response(raw))
}
