use axum::{
    extract::{rejection::JsonRejection, FromRequest, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sage_core::config::Settings;
use sage_core::domain::{
    BasicPatternRequest, BasicPatternResponse, ChatRequest, ChatResponse, ElitePatternRequest,
    ElitePatternResponse, ProPatternRequest, ProPatternResponse, SonarRequest, SonarResponse,
    VisionTierRequest,
};
use sage_core::fusion::WeatherContext;
use sage_core::pattern;
use sage_core::vision::{
    self, ApplyVisionRequest, ApplyVisionResponse, FishfinderReading, OnWaterReading,
    SnapshotRequest,
};
use sage_core::weather::{self, WeatherProvider, WeatherQuery};

#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherProvider>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(weather: Arc<dyn WeatherProvider>, settings: Settings) -> Self {
        Self {
            weather,
            settings: Arc::new(settings),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors_allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/pattern/basic", post(pattern_basic))
        .route("/pattern/pro", post(pattern_pro))
        .route("/pattern/elite", post(pattern_elite))
        .route("/pattern/vision-tier", post(pattern_vision_tier))
        .route("/vision/on-water", post(vision_on_water))
        .route("/vision/fishfinder", post(vision_fishfinder))
        .route("/vision/apply-to-pattern", post(vision_apply_to_pattern))
        .route("/chat", post(chat))
        .route("/sonar", post(sonar))
        .route("/debug/weather", get(debug_weather))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// `Json` whose rejections carry the same `{detail}` body as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
struct ApiJson<T>(T);

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::info!(status = %rejection.status(), error = %rejection.body_text(), "rejected request body");
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

fn unprocessable(err: anyhow::Error) -> ApiError {
    tracing::info!(error = %err, "rejected pattern request");
    ApiError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        detail: err.to_string(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn pattern_basic(
    ApiJson(req): ApiJson<BasicPatternRequest>,
) -> Result<Json<BasicPatternResponse>, ApiError> {
    req.validate().map_err(unprocessable)?;
    let resp = pattern::build_basic_pattern(&req);
    tracing::info!(tier = "basic", phase = %resp.phase, depth_zone = %resp.depth_zone, "pattern generated");
    Ok(Json(resp))
}

async fn pattern_pro(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProPatternRequest>,
) -> Result<Json<ProPatternResponse>, ApiError> {
    req.validate().map_err(unprocessable)?;
    let resp = pattern::generate_pro_pattern(state.weather.as_ref(), &req).await;
    tracing::info!(tier = "pro", phase = %resp.phase, depth_zone = %resp.depth_zone, "pattern generated");
    Ok(Json(resp))
}

async fn pattern_elite(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ElitePatternRequest>,
) -> Result<Json<ElitePatternResponse>, ApiError> {
    req.validate().map_err(unprocessable)?;
    let resp = pattern::generate_elite_pattern(state.weather.as_ref(), &req).await;
    tracing::info!(
        tier = "elite",
        phase = %resp.pattern.phase,
        depth_zone = %resp.pattern.depth_zone,
        "pattern generated"
    );
    Ok(Json(resp))
}

async fn pattern_vision_tier(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<VisionTierRequest>,
) -> Result<Json<ElitePatternResponse>, ApiError> {
    req.validate().map_err(unprocessable)?;
    let resp = pattern::generate_vision_tier_pattern(state.weather.as_ref(), &req).await;
    tracing::info!(
        tier = "vision",
        phase = %resp.pattern.phase,
        depth_zone = %resp.pattern.depth_zone,
        vision = req.vision.is_some(),
        "pattern generated"
    );
    Ok(Json(resp))
}

async fn vision_on_water(ApiJson(_req): ApiJson<SnapshotRequest>) -> Json<OnWaterReading> {
    Json(vision::analyze_on_water())
}

async fn vision_fishfinder(ApiJson(_req): ApiJson<SnapshotRequest>) -> Json<FishfinderReading> {
    Json(vision::analyze_fishfinder())
}

async fn vision_apply_to_pattern(ApiJson(req): ApiJson<ApplyVisionRequest>) -> Json<ApplyVisionResponse> {
    Json(ApplyVisionResponse {
        updated_conditions: vision::apply_vision_to_conditions(
            req.pattern_conditions,
            req.on_water,
            req.fishfinder,
        ),
    })
}

async fn chat(ApiJson(req): ApiJson<ChatRequest>) -> Json<ChatResponse> {
    Json(ChatResponse::echo(&req))
}

async fn sonar(ApiJson(req): ApiJson<SonarRequest>) -> Json<SonarResponse> {
    Json(SonarResponse::placeholder(req))
}

async fn debug_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherContext> {
    Json(weather::resolve_weather(state.weather.as_ref(), &query).await)
}
