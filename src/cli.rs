// cli.rs
use crate::attom::{ApiError, PropertySource};
use crate::classifier::{EnsembleClassifier, EnsembleRecord, NameClassifier};
use crate::pipeline::{analyze_zip, lookup_property, Progress, ZipAnalysis};
use std::fmt::Write as _;
use std::io::Write as _;

pub fn run_lookup(
    source: &dyn PropertySource,
    street: &str,
    city: &str,
    state: &str,
    zip: Option<&str>,
    raw_json: bool,
) -> Result<(), ApiError> {
    let lookup = lookup_property(source, street, city, state, zip)?;

    if raw_json {
        let pretty = serde_json::to_string_pretty(&lookup.raw)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        println!("{pretty}");
    } else {
        println!("{}", lookup.summary_text());
    }
    Ok(())
}

fn report_progress(p: Progress) {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "\r[{:>3.0}%] {:<40}", p.fraction() * 100.0, p.message);
    let _ = stderr.flush();
}

pub fn run_analyze(
    source: &dyn PropertySource,
    classifier: &dyn NameClassifier,
    zip: &str,
) -> Result<(), ApiError> {
    let analysis = analyze_zip(source, classifier, zip, report_progress)?;
    eprintln!();
    print!("{}", render_analysis(&analysis));
    Ok(())
}

pub fn run_compare(ensemble: &EnsembleClassifier, names: &[String]) {
    let records = ensemble.compare(names);
    print!("{}", render_comparison(&ensemble.strategies(), &records));
}

/// Plain-text status, label counts and sampled rows.
pub fn render_analysis(analysis: &ZipAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", analysis.status_text());

    let Some(report) = analysis.report() else {
        return out;
    };

    let _ = writeln!(out, "\n{}\n", report.chart.title);
    for slice in &report.chart.slices {
        let _ = writeln!(
            out,
            "  {:<12} {:>4}  {:>5.1}%",
            slice.label, slice.count, slice.percentage
        );
    }

    let _ = writeln!(out);
    for row in &report.rows {
        let _ = writeln!(out, "  {} | {} | {}", row.address, row.owner_name, row.label);
    }
    out
}

pub fn render_comparison(strategies: &[&str], records: &[EnsembleRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "name\t{}", strategies.join("\t"));
    for record in records {
        let labels: Vec<&str> = strategies
            .iter()
            .map(|s| record.label_for(s).unwrap_or(""))
            .collect();
        let _ = writeln!(out, "{}\t{}", record.name, labels.join("\t"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_tab_separated() {
        let records = vec![EnsembleRecord {
            name: "Li Wei".into(),
            labels: vec![
                ("surname".into(), "Chinese".into()),
                ("generative".into(), "Error".into()),
            ],
        }];
        assert_eq!(
            render_comparison(&["surname", "generative"], &records),
            "name\tsurname\tgenerative\nLi Wei\tChinese\tError\n"
        );
    }

    #[test]
    fn failed_analysis_prints_only_status() {
        assert_eq!(
            render_analysis(&ZipAnalysis::NoProperties),
            "No properties found for this ZIP code.\n"
        );
    }
}
