//! Campus Connect Backend
//!
//! REST backend for student profiles with SQLite persistence, bcrypt/JWT
//! authentication and skill-based recommendations.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod recommend;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{AuthService, TokenService};
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: &Config) -> Self {
        let tokens = Arc::new(TokenService::new(
            config.signing_secret(),
            config.token_ttl_hours,
        ));
        let auth = AuthService::new(repo.clone(), tokens, config.bcrypt_cost);
        Self { repo, auth }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Connect Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Token lifetime: {}h", config.token_ttl_hours);

    if config.jwt_secret.is_none() {
        tracing::warn!(
            "No token secret configured (CAMPUS_JWT_SECRET). Using the development secret!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    let state = AppState::new(repo, &config);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_service = state.auth.clone();

    // Routes requiring a bearer token
    let protected_routes = Router::new()
        .route("/auth/me", get(api::me))
        // Profiles
        .route("/student", post(api::save_profile))
        .route("/student/{user_id}", get(api::get_profile))
        .route("/student/{user_id}/skills", put(api::set_skills))
        .route("/student/{user_id}/subjects", put(api::set_subjects))
        // Recommendations
        .route(
            "/recommendations",
            get(api::get_recommendations).post(api::recommend_for_skills),
        )
        .layer(middleware::from_fn(move |req, next| {
            auth::bearer_auth_layer(auth_service.clone(), req, next)
        }));

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(api::register))
        .route("/auth/login", post(api::login));

    Router::new()
        .nest("/api", protected_routes.merge(public_routes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Server is running" }))
}

#[cfg(test)]
mod tests;
