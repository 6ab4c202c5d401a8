//! # API REST
//!
//! HTTP surface for drugcheck.
//!
//! Handles:
//! - the HTML form front-end (`GET /`, `POST /get_medications`)
//! - JSON endpoints with axum (`/health`, `/api/conditions`, `/api/medications`)
//! - OpenAPI/Swagger documentation for the JSON endpoints
//! - HTTP-specific concerns (form decoding, CORS, access logging)
//!
//! Uses `drugcheck-core` for the lookup itself and `api-shared` for JSON types.

#![warn(rust_2018_idioms)]

pub mod html;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ConditionsRes, HealthRes, HealthService, LookupReq, LookupRes};
use drugcheck_core::{DrugDataSource, MedicationLookupService, ResultPayload, CONDITIONS};

/// Application state shared across handlers
///
/// Holds the lookup service; the data source inside it owns the HTTP connection pool.
struct AppState<S> {
    lookup: Arc<MedicationLookupService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_conditions, lookup_medications),
    components(schemas(HealthRes, ConditionsRes, LookupReq, LookupRes))
)]
pub struct ApiDoc;

/// Build the application router around a lookup service.
///
/// The same router serves the HTML front-end and the JSON API, with access logging through
/// `TraceLayer`.
pub fn router<S>(lookup: MedicationLookupService<S>) -> Router
where
    S: DrugDataSource + 'static,
{
    let state = AppState {
        lookup: Arc::new(lookup),
    };

    Router::new()
        .route("/", get(index))
        .route("/get_medications", post(get_medications::<S>))
        .route("/health", get(health))
        .route("/api/conditions", get(list_conditions))
        .route("/api/medications", post(lookup_medications::<S>))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Condition selection form
async fn index() -> Html<String> {
    Html(html::render_condition_form(&CONDITIONS))
}

/// Run a lookup for the conditions submitted by the form
///
/// Reads every `conditions[]` field in submission order; other fields are ignored.
///
/// # Errors
/// Returns `500 Internal Server Error` if any openFDA call fails or returns data that does
/// not decode.
async fn get_medications<S>(
    State(state): State<AppState<S>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, (StatusCode, &'static str)>
where
    S: DrugDataSource + 'static,
{
    let conditions = selected_conditions(fields);
    let payload = run_lookup(&state, &conditions).await?;
    Ok(Html(html::render_result(&payload)))
}

fn selected_conditions(fields: Vec<(String, String)>) -> Vec<String> {
    fields
        .into_iter()
        .filter(|(name, _)| name == html::SELECTION_FIELD)
        .map(|(_, value)| value)
        .collect()
}

async fn run_lookup<S: DrugDataSource>(
    state: &AppState<S>,
    conditions: &[String],
) -> Result<ResultPayload, (StatusCode, &'static str)> {
    match state.lookup.lookup(conditions).await {
        Ok(payload) => Ok(payload),
        Err(e) => {
            tracing::error!("Medication lookup error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Reports process liveness for monitoring and load balancer checks.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/conditions",
    responses(
        (status = 200, description = "Conditions offered for selection", body = ConditionsRes)
    )
)]
async fn list_conditions() -> Json<ConditionsRes> {
    Json(ConditionsRes {
        conditions: CONDITIONS.iter().map(|c| c.to_string()).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/api/medications",
    request_body = LookupReq,
    responses(
        (status = 200, description = "Medications, interactions and side effects", body = LookupRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Run a lookup and return the result as JSON
///
/// # Errors
/// Returns `500 Internal Server Error` if the lookup fails.
async fn lookup_medications<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<LookupReq>,
) -> Result<Json<LookupRes>, (StatusCode, &'static str)>
where
    S: DrugDataSource + 'static,
{
    let payload = run_lookup(&state, &req.conditions).await?;
    Ok(Json(LookupRes {
        conditions: payload.conditions,
        medications: payload.medications,
        interactions: payload.interactions,
        side_effects: payload.side_effects,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selection_fields_are_kept_in_order() {
        let fields = vec![
            ("conditions[]".to_string(), "Insomnia".to_string()),
            ("csrf".to_string(), "ignored".to_string()),
            ("conditions[]".to_string(), "Anxiety".to_string()),
            ("conditions[]".to_string(), "Insomnia".to_string()),
        ];
        assert_eq!(
            selected_conditions(fields),
            vec!["Insomnia", "Anxiety", "Insomnia"]
        );
    }

    #[test]
    fn openapi_documents_json_endpoints() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/api/conditions", "/api/medications"] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
