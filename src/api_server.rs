// Axum API Server Module
//
// Purpose: thin HTTP adapter over the recommendation engine. Inputs are
// validated by serde deserialisation before they reach the core.

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::advisory::{AdvisoryGenerator, RecommendationResult};
use crate::error::UnknownCropError;
use crate::inputs::InputVector;
use crate::knowledge_base::{all_profiles, lookup, CropProfile};

// ============================================================================
// Configuration
// ============================================================================

/// Server settings, read once from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP literal or hostname, resolved at startup
    pub host: String,
    pub port: u16,
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cache_ttl_secs: 300,
            cache_capacity: 10_000,
        }
    }
}

impl ServerConfig {
    /// `HOST`, `PORT`, `CACHE_TTL_SECS`, `CACHE_CAPACITY`.
    /// Missing or unparseable numbers keep the default. `HOST` is kept verbatim
    /// and only checked when resolved, so a bad host fails startup instead of
    /// widening the bind.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: get("HOST")
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&get, "PORT", defaults.port),
            cache_ttl_secs: parse_or(&get, "CACHE_TTL_SECS", defaults.cache_ttl_secs),
            cache_capacity: parse_or(&get, "CACHE_CAPACITY", defaults.cache_capacity),
        }
    }

    /// Resolve `host:port` to the first address it names.
    /// Hostnames such as `localhost` go through the system resolver.
    pub async fn resolve_addr(&self) -> anyhow::Result<SocketAddr> {
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to resolve HOST={}", self.host))?;
        addrs
            .next()
            .with_context(|| format!("HOST={} resolved to no addresses", self.host))
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Results are pure functions of the input vector, so a hit is always exact
    pub cache: Cache<InputVector, RecommendationResult>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!(
            "Initializing Moka cache (capacity {}, ttl {}s)...",
            config.cache_capacity,
            config.cache_ttl_secs
        );
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self { cache }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Knowledge base
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:name", get(get_crop))

        // Recommendation (query string or JSON body)
        .route("/api/recommend", get(recommend_query).post(recommend_json))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops() -> Result<Json<serde_json::Value>, AppError> {
    let profiles = all_profiles();
    let data = serde_json::to_value(profiles)
        .map_err(|e| AppError::Internal(format!("JSON encode error: {}", e)))?;

    Ok(Json(serde_json::json!({
        "rows": profiles.len(),
        "data": data,
    })))
}

async fn get_crop(Path(name): Path<String>) -> Result<Json<&'static CropProfile>, AppError> {
    let profile = lookup(&name)?;
    Ok(Json(profile))
}

/// GET /api/recommend?soil=Black&season=Kharif&duration=Long&water=Medium
async fn recommend_query(
    State(state): State<AppState>,
    Query(input): Query<InputVector>,
) -> Json<RecommendationResult> {
    Json(recommend_cached(&state, input).await)
}

/// POST /api/recommend with {"soil", "season", "duration", "water"}
async fn recommend_json(
    State(state): State<AppState>,
    Json(input): Json<InputVector>,
) -> Json<RecommendationResult> {
    Json(recommend_cached(&state, input).await)
}

async fn recommend_cached(state: &AppState, input: InputVector) -> RecommendationResult {
    if let Some(cached) = state.cache.get(&input).await {
        tracing::debug!("Cache hit for {:?}", input);
        return cached;
    }

    let result = AdvisoryGenerator::generate(&input);
    tracing::info!(
        "Recommended {} for {}/{}/{}/{} (risk {})",
        result.crop,
        input.soil,
        input.season,
        input.duration,
        input.water,
        result.risk_level
    );

    state.cache.insert(input, result.clone()).await;
    result
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    UnknownCrop(UnknownCropError),
    Internal(String),
}

impl From<UnknownCropError> for AppError {
    fn from(err: UnknownCropError) -> Self {
        AppError::UnknownCrop(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::UnknownCrop(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_with(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CACHE_TTL_SECS", "60"),
            ("CACHE_CAPACITY", "not-a-number"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.cache_capacity, 10_000);
    }

    #[tokio::test]
    async fn test_ip_literal_host_resolves_verbatim() {
        let config = config_with(&[("HOST", "127.0.0.1"), ("PORT", "8080")]);
        let addr = config.resolve_addr().await.unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_localhost_host_stays_on_loopback() {
        let config = config_with(&[("HOST", "localhost"), ("PORT", "8080")]);
        assert_eq!(config.host, "localhost");

        let addr = config.resolve_addr().await.unwrap();
        assert!(addr.ip().is_loopback(), "localhost resolved to {}", addr);
        assert!(!addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_internal_error_is_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_crop_error_is_404() {
        let response = AppError::from(UnknownCropError::new("Barley")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
