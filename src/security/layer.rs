use super::config::SecurityHeadersConfig;
use super::response::SecurityHeadersExt;
use super::types::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
    SecurityHeader,
};
use axum::Router;
use axum::http::{Request, Response};
use futures::future::BoxFuture;
use tower::Service;

/// Tower layer that appends one security header to every response
///
/// The layer is built once at pipeline setup with the chosen value and
/// holds nothing else.
#[derive(Debug, Clone, Copy)]
pub struct SecurityHeaderLayer<H> {
    value: H,
}

impl<H: SecurityHeader> SecurityHeaderLayer<H> {
    pub fn new(value: H) -> Self {
        Self { value }
    }

    pub fn value(&self) -> H {
        self.value
    }
}

impl<S, H: SecurityHeader> tower::Layer<S> for SecurityHeaderLayer<H> {
    type Service = SecurityHeaderService<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeaderService {
            inner,
            value: self.value,
        }
    }
}

/// Tower service that appends one security header to every response
#[derive(Debug, Clone)]
pub struct SecurityHeaderService<S, H> {
    inner: S,
    value: H,
}

impl<S, H, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityHeaderService<S, H>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Send + 'static,
    S::Future: Send,
    H: SecurityHeader,
    ReqBody: 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let value = self.value;
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;
            response.append_security_header(value);
            Ok(response)
        })
    }
}

pub type ContentTypeOptionsLayer = SecurityHeaderLayer<ContentTypeOption>;
pub type FrameOptionsLayer = SecurityHeaderLayer<FrameOption>;
pub type ReferrerPolicyLayer = SecurityHeaderLayer<ReferrerPolicy>;
pub type OpenerPolicyLayer = SecurityHeaderLayer<OpenerPolicy>;
pub type EmbedderPolicyLayer = SecurityHeaderLayer<EmbedderPolicy>;
pub type ResourcePolicyLayer = SecurityHeaderLayer<ResourcePolicy>;

/// Fluent pipeline setup: one call per security header.
///
/// ```rust
/// use axum::{Router, routing::get};
/// use web_essentials::security::{FrameOption, ReferrerPolicy, SecurityHeadersRouterExt};
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "ok" }))
///     .add_frame_options(FrameOption::Deny)
///     .add_referrer_policy(ReferrerPolicy::StrictOriginWhenCrossOrigin);
/// ```
pub trait SecurityHeadersRouterExt: Sized {
    /// Layer a header of any kind onto every route registered so far
    fn add_security_header<H: SecurityHeader>(self, value: H) -> Self;

    fn add_content_type_options(self, value: ContentTypeOption) -> Self {
        self.add_security_header(value)
    }

    fn add_frame_options(self, value: FrameOption) -> Self {
        self.add_security_header(value)
    }

    fn add_referrer_policy(self, value: ReferrerPolicy) -> Self {
        self.add_security_header(value)
    }

    fn add_opener_policy(self, value: OpenerPolicy) -> Self {
        self.add_security_header(value)
    }

    fn add_embedder_policy(self, value: EmbedderPolicy) -> Self {
        self.add_security_header(value)
    }

    fn add_resource_policy(self, value: ResourcePolicy) -> Self {
        self.add_security_header(value)
    }
}

impl<S> SecurityHeadersRouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn add_security_header<H: SecurityHeader>(self, value: H) -> Self {
        tracing::debug!(
            header = H::NAME.as_str(),
            value = value.as_str(),
            "Security header layer installed"
        );
        self.layer(SecurityHeaderLayer::new(value))
    }
}

/// Layer every header selected in `config` onto the router
///
/// Returns the router unchanged when the configuration is disabled.
pub fn apply_security_headers<S>(router: Router<S>, config: &SecurityHeadersConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !config.enabled {
        return router;
    }

    let mut router = router;

    if let Some(value) = config.content_type_options {
        router = router.add_content_type_options(value);
    }
    if let Some(value) = config.frame_options {
        router = router.add_frame_options(value);
    }
    if let Some(value) = config.referrer_policy {
        router = router.add_referrer_policy(value);
    }
    if let Some(value) = config.opener_policy {
        router = router.add_opener_policy(value);
    }
    if let Some(value) = config.embedder_policy {
        router = router.add_embedder_policy(value);
    }
    if let Some(value) = config.resource_policy {
        router = router.add_resource_policy(value);
    }

    router
}
