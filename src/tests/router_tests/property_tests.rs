use crate::errors::ServerError;
use crate::responses::{html_error_response, status_for};
use crate::router::handle;
use crate::tests::utils::*;
use serde_json::json;

#[test]
fn home_page_links_every_tool() {
    let state = app_state(FakeSource::default(), sample_classifier());
    let mut resp = handle(get("/"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("action=\"/property\""));
    assert!(body.contains("action=\"/zip\""));
    assert!(body.contains("href=\"/compare\""));
}

#[test]
fn property_lookup_renders_summary_and_raw_json() {
    let source = FakeSource::default().detail("4529 Winona Court", owner_doc("Maria Garcia"));
    let state = app_state(source, sample_classifier());

    let mut resp = handle(
        get("/property?street=4529+Winona+Court&city=Denver&state=CO&zip=80212"),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Maria Garcia"));
    assert!(body.contains("Full JSON Response"));
    // The form echoes what was typed.
    assert!(body.contains("value=\"4529 Winona Court\""));
}

#[test]
fn property_lookup_without_match_says_so() {
    let source = FakeSource::default().detail("1 Main St", json!({"status": {"code": 0}}));
    let state = app_state(source, sample_classifier());

    let mut resp = handle(get("/property?street=1+Main+St&city=Denver&state=CO"), &state)
        .expect("Handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("No property found."));
    assert!(body.contains("&quot;code&quot;: 0"));
}

#[test]
fn property_lookup_requires_street_city_and_state() {
    let state = app_state(FakeSource::default(), sample_classifier());

    let err = handle(get("/property?street=1+Main+St&city=Denver&state=+"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(status_for(&err), 400);
    assert!(err.to_string().contains("Street, City, and State are required."));
}

#[test]
fn upstream_failure_becomes_bad_gateway_page() {
    // No detail registered for this street, so the fake fails the call.
    let state = app_state(FakeSource::default(), sample_classifier());

    let err = handle(get("/property?street=9+Nowhere&city=Denver&state=CO"), &state).unwrap_err();
    assert!(matches!(err, ServerError::Upstream(_)));

    let mut resp = html_error_response(err);
    assert_eq!(resp.status(), 502);
    assert!(body_string(&mut resp).contains("connection refused"));
}

#[test]
fn missing_api_key_is_a_configuration_error() {
    let source = FakeSource {
        missing_key: true,
        ..Default::default()
    };
    let state = app_state(source, sample_classifier());

    let err = handle(get("/property?street=1+Main+St&city=Denver&state=CO"), &state).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));

    let mut resp = html_error_response(err);
    assert_eq!(resp.status(), 500);
    assert!(body_string(&mut resp).contains("ATTOM_API_KEY"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = app_state(FakeSource::default(), sample_classifier());
    let err = handle(get("/admin"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}
