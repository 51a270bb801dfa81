use crate::attom::{AddressListing, ApiError, PropertySource};
use crate::classifier::{EnsembleClassifier, NameClassifier, SurnameClassifier};
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned records API. Detail calls for streets not in `details` fail the
/// way a dropped connection would.
#[derive(Default)]
pub struct FakeSource {
    pub listing: Option<Value>,
    pub details: HashMap<String, Value>,
    pub missing_key: bool,
    pub detail_calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_listing(listing: Value) -> Self {
        Self {
            listing: Some(listing),
            ..Default::default()
        }
    }

    pub fn detail(mut self, street: &str, doc: Value) -> Self {
        self.details.insert(street.to_string(), doc);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

impl PropertySource for FakeSource {
    fn addresses_by_zip(&self, _zip_code: &str) -> Result<AddressListing, ApiError> {
        if self.missing_key {
            return Err(ApiError::MissingApiKey);
        }
        match &self.listing {
            Some(v) => {
                serde_json::from_value(v.clone()).map_err(|e| ApiError::Decode(e.to_string()))
            }
            None => Err(ApiError::Http {
                status: 401,
                body: "Invalid API key".into(),
            }),
        }
    }

    fn property_detail(
        &self,
        street: &str,
        _city: &str,
        _state: &str,
        _zip_code: Option<&str>,
    ) -> Result<Value, ApiError> {
        if self.missing_key {
            return Err(ApiError::MissingApiKey);
        }
        self.detail_calls.lock().unwrap().push(street.to_string());
        self.details
            .get(street)
            .cloned()
            .ok_or_else(|| ApiError::Network("connection refused".into()))
    }
}

/// Classifier answering from a fixed table, counting how often it is called.
pub struct FakeClassifier {
    pub labels: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl FakeClassifier {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            labels: pairs
                .iter()
                .map(|(n, l)| (n.to_string(), l.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NameClassifier for FakeClassifier {
    fn strategy(&self) -> &str {
        "fake"
    }

    fn classify(&self, names: &[String]) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        names
            .iter()
            .map(|n| {
                self.labels
                    .get(n)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".into())
            })
            .collect()
    }
}

pub fn listing(streets: &[&str]) -> Value {
    let props: Vec<Value> = streets
        .iter()
        .map(|s| {
            json!({"address": {
                "line1": s,
                "locality": "DENVER",
                "countrySubd": "CO",
                "postal1": "80212",
                "oneLine": format!("{s}, DENVER, CO 80212")
            }})
        })
        .collect();
    json!({"status": {"code": 0, "total": props.len()}, "property": props})
}

pub fn owner_doc(owner: &str) -> Value {
    json!({"property": [{"assessment": {"owner": {"owner1": {"fullName": owner}}}}]})
}

/// The three-address 80212 sample: two owners resolve, the third call fails.
pub fn sample_80212() -> FakeSource {
    FakeSource::with_listing(listing(&[
        "4529 WINONA CT",
        "4535 WINONA CT",
        "4541 WINONA CT",
    ]))
    .detail("4529 WINONA CT", owner_doc("Maria Garcia"))
    .detail("4535 WINONA CT", owner_doc("Li Wei"))
}

pub fn sample_classifier() -> FakeClassifier {
    FakeClassifier::new(&[("Maria Garcia", "Spanish"), ("Li Wei", "Chinese")])
}

pub fn app_state(source: FakeSource, classifier: FakeClassifier) -> AppState {
    let classifier: Arc<dyn NameClassifier> = Arc::new(classifier);
    AppState {
        properties: Arc::new(source),
        ensemble: EnsembleClassifier::new(vec![classifier.clone(), Arc::new(SurnameClassifier)]),
        classifier,
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
