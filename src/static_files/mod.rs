//! Static file serving with a public max-age Cache-Control header.
//!
//! Wraps `tower_http::services::ServeDir` so that every file it serves
//! leaves with `Cache-Control: public, max-age=<seconds>`.

mod config;
mod layer;

pub use config::{StaticFilesConfig, StaticFilesConfigBuilder};
pub use layer::{
    FileCacheControl, StaticFiles, StaticFilesRouterExt, build_cache_control_layer,
    cache_control_value, serve_static_files,
};
