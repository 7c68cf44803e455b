//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::middleware::{CredentialGate, require_admin, require_credential};
use auth::{AuthConfig, PgAccountRepository, auth_router};
use axum::body::Body;
use axum::middleware::{self, Next};
use axum::{
    Router, http,
    http::{Method, Request, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use platform::token::TokenCodec;
use research::{PgResearchRepository, catalog_admin_router, research_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,research=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load the signing secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);

        let password_pepper = match env::var("PASSWORD_PEPPER") {
            Ok(pepper_b64) => Some(Engine::decode(&general_purpose::STANDARD, &pepper_b64)?),
            Err(_) => None,
        };

        AuthConfig {
            token_secret: secret,
            password_pepper,
        }
    };

    let codec = TokenCodec::new(auth_config.token_secret);

    // Repositories
    let account_repo = PgAccountRepository::new(pool.clone());
    let research_repo = PgResearchRepository::new(pool.clone());

    // Authorization gates
    let gate = CredentialGate::new(Arc::new(codec.clone()));
    let credential_gate = middleware::from_fn(move |req: Request<Body>, next: Next| {
        require_credential(gate.clone(), req, next)
    });
    let admin_gate = middleware::from_fn(require_admin);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Static frontend; every non-API path falls back to the SPA entry point
    let frontend_dist = env::var("FRONTEND_DIST").unwrap_or_else(|_| "dist".to_string());
    let frontend = ServeDir::new(&frontend_dist)
        .not_found_service(ServeFile::new(Path::new(&frontend_dist).join("index.html")));

    // Build router
    let app = Router::new()
        .nest("/api", auth_router(account_repo, auth_config, codec))
        .nest(
            "/api/field-researches",
            research_router(research_repo.clone()).layer(credential_gate.clone()),
        )
        .nest(
            "/api/admin/field-researches",
            catalog_admin_router(research_repo)
                .layer(admin_gate)
                .layer(credential_gate),
        )
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
