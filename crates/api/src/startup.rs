use crate::{
    climate::{self, ClimateService},
    index_handler, precipitation, range_summary, routes, start_summary, stations, tobs,
    ClimateData, ClimateDatabase,
};
use anyhow::Context;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub climate: Arc<ClimateService>,
}

impl AppState {
    pub fn new(remote_url: String, climate_data: Arc<dyn ClimateData>) -> Self {
        Self {
            remote_url,
            climate: Arc::new(ClimateService::new(climate_data)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::climate_routes::precipitation,
        routes::climate::climate_routes::stations,
        routes::climate::climate_routes::tobs,
        routes::climate::climate_routes::start_summary,
        routes::climate::climate_routes::range_summary,
    ),
    components(
        schemas(
            climate::Precipitation,
            climate::TemperatureObservation,
            climate::TemperatureSummary,
            climate::Message,
            climate::ErrorBody,
        )
    ),
    tags(
        (name = "climate api", description = "a read-only RESTful api serving precipitation and temperature statistics for Hawaii weather stations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database_path: String,
) -> Result<AppState, anyhow::Error> {
    let climate_db = ClimateDatabase::open(&database_path)
        .await
        .context("error setting up climate database")?;

    Ok(AppState::new(remote_url, Arc::new(climate_db)))
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(start_summary))
        .route("/api/v1.0/{start}/{end}", get(range_summary))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, path: {}, time: {}", response.status().as_str(), path, response_time);

    response
}
