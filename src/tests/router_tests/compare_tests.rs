use crate::router::handle;
use crate::tests::utils::*;

#[test]
fn compare_tabulates_every_strategy() {
    let state = app_state(FakeSource::default(), sample_classifier());

    let mut resp = handle(get("/compare?names=Maria+Garcia%0D%0ALi+Wei"), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("id=\"comparison\""));
    assert!(body.contains("<th>fake</th>"));
    assert!(body.contains("<th>surname</th>"));
    assert!(body.contains("<td>Maria Garcia</td>"));
    assert!(body.contains("<td>Spanish</td>"));
    // Both strategies agree on both names.
    assert_eq!(body.matches("<td>yes</td>").count(), 2);
}

#[test]
fn compare_without_names_shows_only_the_form() {
    let state = app_state(FakeSource::default(), sample_classifier());

    let mut resp = handle(get("/compare"), &state).expect("Handler failed");
    let body = body_string(&mut resp);
    assert!(body.contains("name=\"names\""));
    assert!(!body.contains("id=\"comparison\""));
}
