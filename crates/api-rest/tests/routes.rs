//! Router-level tests driving the full axum app with an in-memory data source.

use api_rest::router;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use drugcheck_core::{DrugDataSource, LookupError, LookupResult, MedicationLookupService};
use http_body_util::BodyExt;
use openfda::OpenFdaError;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct StubSource {
    brands: HashMap<String, Vec<String>>,
    interactions: Vec<String>,
    side_effects: Vec<String>,
    broken: bool,
    unions: Arc<Mutex<Vec<String>>>,
}

impl DrugDataSource for StubSource {
    async fn brand_names_for_condition(&self, condition: &str) -> LookupResult<Vec<String>> {
        if self.broken {
            return Err(LookupError::OpenFda(OpenFdaError::Decode {
                endpoint: "drug/label",
                path: "<root>".into(),
                message: "expected value at line 1 column 1".into(),
            }));
        }
        Ok(self.brands.get(condition).cloned().unwrap_or_default())
    }

    async fn interactions_for(&self, medications: &[String]) -> LookupResult<Vec<String>> {
        self.unions.lock().unwrap().push(medications.join("+"));
        Ok(self.interactions.clone())
    }

    async fn side_effects_for(&self, medications: &[String]) -> LookupResult<Vec<String>> {
        self.unions.lock().unwrap().push(medications.join("+"));
        Ok(self.side_effects.clone())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn asthma_source() -> StubSource {
    StubSource {
        brands: HashMap::from([("Asthma".to_string(), strings(&["Albuterol"]))]),
        interactions: strings(&["desc1", "desc2"]),
        side_effects: strings(&["cough"]),
        ..StubSource::default()
    }
}

fn app(source: StubSource) -> Router {
    router(MedicationLookupService::new(source))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/get_medications")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn index_serves_condition_form() {
    let response = app(StubSource::default())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<select name="conditions[]" id="conditions" multiple>"#));
    assert!(html.contains(r#"<option value="High Blood Pressure">High Blood Pressure</option>"#));
    assert_eq!(html.matches("<option ").count(), 16);
}

#[tokio::test]
async fn form_submission_renders_three_sections() {
    let response = app(asthma_source())
        .oneshot(form_post("conditions%5B%5D=Asthma"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h3>Medications for Asthma:</h3>"));
    assert!(html.contains("<li>Albuterol</li>"));
    assert!(html.contains("<li>desc1</li><li>desc2</li>"));
    assert!(html.contains("<li>cough</li>"));
    assert!(!html.contains("No potential side effects found."));
}

#[tokio::test]
async fn repeated_conditions_keep_duplicate_medications() {
    let source = StubSource {
        brands: HashMap::from([
            ("Insomnia".to_string(), strings(&["Zolpidem"])),
            ("Anxiety".to_string(), strings(&["Zolpidem"])),
        ]),
        ..StubSource::default()
    };
    let unions = source.unions.clone();

    let response = app(source)
        .oneshot(form_post("conditions%5B%5D=Insomnia&conditions%5B%5D=Anxiety"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("<h3>Medications for Insomnia, Anxiety:</h3>"));
    assert_eq!(html.matches("<li>Zolpidem</li>").count(), 2);
    assert!(html.contains("<p>No potential side effects found.</p>"));
    assert_eq!(
        *unions.lock().unwrap(),
        strings(&["Zolpidem+Zolpidem", "Zolpidem+Zolpidem"])
    );
}

#[tokio::test]
async fn empty_submission_is_an_empty_selection() {
    let source = StubSource::default();
    let unions = source.unions.clone();

    let response = app(source).oneshot(form_post("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h3>Medications for :</h3>"));
    assert!(html.contains("No potential side effects found."));
    assert_eq!(*unions.lock().unwrap(), strings(&["", ""]));
}

#[tokio::test]
async fn lookup_failure_is_a_generic_server_error() {
    let source = StubSource {
        broken: true,
        ..StubSource::default()
    };

    let response = app(source)
        .oneshot(form_post("conditions%5B%5D=Asthma"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal error");
}

#[tokio::test]
async fn json_lookup_returns_payload() {
    let request = Request::post("/api/medications")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"conditions": ["Asthma"]}"#))
        .unwrap();

    let response = app(asthma_source()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "conditions": ["Asthma"],
            "medications": ["Albuterol"],
            "interactions": ["desc1", "desc2"],
            "side_effects": ["cough"]
        })
    );
}

#[tokio::test]
async fn conditions_and_health_endpoints() {
    let app = app(StubSource::default());

    let response = app
        .clone()
        .oneshot(Request::get("/api/conditions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["conditions"].as_array().unwrap().len(), 16);
    assert_eq!(json["conditions"][4], "Migranes");

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["ok"], true);
}
