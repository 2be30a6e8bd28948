use super::config::StaticFilesConfig;
use crate::error::{EssentialsError, Result};
use axum::Router;
use axum::http::{HeaderValue, Response, StatusCode, header};
use std::path::Path;
use std::time::Duration;
use tower::Layer;
use tower_http::services::ServeDir;
use tower_http::set_header::{MakeHeaderValue, SetResponseHeader, SetResponseHeaderLayer};

/// `ServeDir` whose file responses carry `Cache-Control: public, max-age=N`
pub type StaticFiles = SetResponseHeader<ServeDir, FileCacheControl>;

/// Produces the Cache-Control value for file responses only
///
/// Error responses from the file service (404, 405, 500) are left alone.
/// 304 revalidations carry the header so caches refresh their lifetime.
#[derive(Debug, Clone)]
pub struct FileCacheControl {
    value: HeaderValue,
}

impl FileCacheControl {
    pub fn new(max_age: Duration) -> Result<Self> {
        Ok(Self {
            value: cache_control_value(max_age)?,
        })
    }

    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

impl<B> MakeHeaderValue<Response<B>> for FileCacheControl {
    fn make_header_value(&mut self, response: &Response<B>) -> Option<HeaderValue> {
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            Some(self.value.clone())
        } else {
            None
        }
    }
}

/// Build `public, max-age=<seconds>` for `max_age`, truncated to whole seconds
///
/// # Errors
///
/// Returns [`EssentialsError::InvalidMaxAge`] when `max_age` is under one second.
pub fn cache_control_value(max_age: Duration) -> Result<HeaderValue> {
    let seconds = max_age.as_secs();
    if seconds == 0 {
        return Err(EssentialsError::InvalidMaxAge);
    }

    Ok(HeaderValue::from_str(&format!("public, max-age={}", seconds))?)
}

/// Build a tower-http layer that sets Cache-Control on file responses
///
/// The header is set, replacing any value the inner service wrote.
pub fn build_cache_control_layer(
    max_age: Duration,
) -> Result<SetResponseHeaderLayer<FileCacheControl>> {
    Ok(SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        FileCacheControl::new(max_age)?,
    ))
}

/// Serve files from `root` with a public max-age Cache-Control header
///
/// Missing files, directory handling and read errors are left to `ServeDir`.
pub fn serve_static_files(root: impl AsRef<Path>, max_age: Duration) -> Result<StaticFiles> {
    let root = root.as_ref();
    let layer = build_cache_control_layer(max_age)?;

    tracing::debug!(
        root = %root.display(),
        max_age_secs = max_age.as_secs(),
        "Static file service configured"
    );

    Ok(layer.layer(ServeDir::new(root)))
}

/// Mount cache-controlled static files on a router
pub trait StaticFilesRouterExt: Sized {
    /// Serve `root` under `path`; `/` installs the files as the router fallback
    ///
    /// # Errors
    ///
    /// Fails for a max-age under one second or a path not starting with `/`.
    fn use_static_files(self, path: &str, root: impl AsRef<Path>, max_age: Duration)
    -> Result<Self>;

    /// Serve static files as described by `config`; no-op when disabled
    ///
    /// # Errors
    ///
    /// Returns the [`StaticFilesConfig::validate`] error for an invalid config.
    fn with_static_files(self, config: &StaticFilesConfig) -> Result<Self>;
}

impl<S> StaticFilesRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn use_static_files(
        self,
        path: &str,
        root: impl AsRef<Path>,
        max_age: Duration,
    ) -> Result<Self> {
        if !path.starts_with('/') {
            return Err(EssentialsError::invalid_config(format!(
                "Static file mount path must start with '/', got: {}",
                path
            )));
        }

        let service = serve_static_files(root, max_age)?;
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            Ok(self.fallback_service(service))
        } else {
            Ok(self.nest_service(path, service))
        }
    }

    fn with_static_files(self, config: &StaticFilesConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(self);
        }

        config.validate()?;
        self.use_static_files(&config.mount_path, &config.root, config.max_age())
    }
}
