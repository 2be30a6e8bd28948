//! web-essentials - security headers and cached static files for axum
//!
//! Small, typed helpers for the response headers most web applications
//! want on every response, built on top of axum and tower.
//!
//! # Features
//!
//! - **Security headers**: X-Content-Type-Options, X-Frame-Options,
//!   Referrer-Policy and the Cross-Origin-Opener/Embedder/Resource policies,
//!   each a closed enum mapped to its canonical header value
//! - **Direct setters**: append a header straight onto a `Response` or `HeaderMap`
//! - **Middleware**: tower layers installed with one fluent call per header
//! - **Static files**: `ServeDir` with `Cache-Control: public, max-age=<seconds>`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::{Router, routing::get};
//! use web_essentials::security::{
//!     ContentTypeOption, FrameOption, ReferrerPolicy, SecurityHeadersRouterExt,
//! };
//! use web_essentials::static_files::StaticFilesRouterExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     web_essentials::init_tracing();
//!
//!     let app: Router = Router::new()
//!         .route("/health", get(|| async { "ok" }))
//!         .use_static_files("/assets", "public", Duration::from_secs(3600))?
//!         .add_content_type_options(ContentTypeOption::NoSniff)
//!         .add_frame_options(FrameOption::Deny)
//!         .add_referrer_policy(ReferrerPolicy::StrictOriginWhenCrossOrigin);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
pub mod security;
pub mod static_files;
pub mod utils;

pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{EssentialsError, Result};
pub use security::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
    SecurityHeadersConfig, SecurityHeadersConfigBuilder, SecurityHeadersExt,
    SecurityHeadersRouterExt,
};
pub use static_files::{StaticFilesConfig, StaticFilesConfigBuilder, StaticFilesRouterExt};

use axum::Router;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "web_essentials=debug")
/// - `ESSENTIALS_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("ESSENTIALS_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Apply a whole [`Config`] to a router
///
/// Static files are mounted first so the security header layers also
/// cover file responses.
///
/// # Errors
///
/// Returns the static file validation error when static files are enabled
/// with an invalid configuration.
pub fn apply_config<S>(router: Router<S>, config: &Config) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let router = router.with_static_files(&config.static_files)?;
    Ok(security::apply_security_headers(router, &config.security))
}
