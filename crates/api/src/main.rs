use axum::{
    extract::Path,
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mudra_core::catalog;
use mudra_core::domain::profile::RiskProfile;
use mudra_core::domain::recommendation::RecommendationSet;
use mudra_core::risk;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = mudra_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/risk/assess", post(assess_risk))
        .route("/recommendations", post(get_recommendations))
        .route("/recommendations/:profile", get(get_recommendations_by_label))
        .layer(
            // The survey client is a browser app served from a different origin.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct AssessRequest {
    answers: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct AssessResponse {
    risk_profile: RiskProfile,
    score: i64,
    generated_at: DateTime<Utc>,
    recommendations: RecommendationSet,
}

async fn assess_risk(
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, StatusCode> {
    // The classifier itself is total; an empty submission is a client mistake.
    if req.answers.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let assessment = risk::classify(&req.answers);

    Ok(Json(AssessResponse {
        risk_profile: assessment.profile,
        score: assessment.score,
        generated_at: Utc::now(),
        recommendations: *catalog::recommendations_for(assessment.profile),
    }))
}

#[derive(Debug, Deserialize)]
struct RecommendationsRequest {
    risk_profile: String,
}

async fn get_recommendations(
    Json(req): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationSet>, StatusCode> {
    let set = catalog::lookup(&req.risk_profile).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(*set))
}

async fn get_recommendations_by_label(
    Path(profile): Path<String>,
) -> Result<Json<RecommendationSet>, StatusCode> {
    let set = catalog::lookup(&profile).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(*set))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &mudra_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
