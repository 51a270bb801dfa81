use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn zip_page_shows_status_chart_and_rows() {
    let state = app_state(sample_80212(), sample_classifier());

    let mut resp = handle(get("/zip?zip=80212"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Analysis complete. Found 2 property owners to analyze in the sample."));
    assert!(body.contains("Predicted Origin Distribution for ZIP Code 80212 (Sample of 2 properties)"));
    assert!(body.contains("<figure class=\"chart\">"));
    assert!(body.contains("3 properties sampled, 2 owners classified."));
    assert!(body.contains("M 150.00 150.00"));
    assert!(body.contains("4535 WINONA CT, DENVER, CO 80212"));
    assert!(body.contains("Chinese"));
    assert!(body.contains("/zip/export?zip=80212"));
}

#[test]
fn zip_page_without_properties_has_no_chart() {
    let state = app_state(FakeSource::with_listing(listing(&[])), sample_classifier());

    let mut resp = handle(get("/zip?zip=00000"), &state).expect("Handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found for this ZIP code."));
    assert!(!body.contains("class=\"chart\""));
    assert!(!body.contains("/zip/export"));
}

#[test]
fn zip_is_required() {
    let state = app_state(sample_80212(), sample_classifier());

    let err = handle(get("/zip?zip="), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(get("/zip/export"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn export_serves_a_workbook() {
    let state = app_state(sample_80212(), sample_classifier());

    let resp = handle(get("/zip/export?zip=80212"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"zip_80212_"));
    assert!(disposition.ends_with(".xlsx\""));
}

#[test]
fn export_without_owners_is_rejected() {
    let source = FakeSource::with_listing(listing(&["1 A ST"]));
    let state = app_state(source, sample_classifier());

    let err = handle(get("/zip/export?zip=80212"), &state).unwrap_err();
    let ServerError::BadRequest(msg) = err else {
        panic!("expected BadRequest, got {err:?}");
    };
    assert!(msg.contains("could not retrieve owner names"));
}
