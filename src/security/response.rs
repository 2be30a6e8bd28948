use super::types::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
    SecurityHeader,
};
use axum::http::{HeaderMap, Response};

/// Direct setters for security headers on a response or header map.
///
/// Every setter appends a header line rather than replacing an existing
/// one, so calling the same setter twice produces two header lines.
///
/// # Example
///
/// ```rust
/// use axum::{body::Body, http::Response};
/// use web_essentials::security::{FrameOption, ReferrerPolicy, SecurityHeadersExt};
///
/// let mut response = Response::new(Body::empty());
/// response
///     .set_frame_options(FrameOption::Deny)
///     .set_referrer_policy(ReferrerPolicy::NoReferrer);
///
/// assert_eq!(response.headers()["x-frame-options"], "deny");
/// ```
pub trait SecurityHeadersExt {
    /// Append `value` under its header name
    fn append_security_header<H: SecurityHeader>(&mut self, value: H) -> &mut Self;

    /// Append `X-Content-Type-Options`
    fn set_content_type_options(&mut self, value: ContentTypeOption) -> &mut Self {
        self.append_security_header(value)
    }

    /// Append `X-Frame-Options`
    fn set_frame_options(&mut self, value: FrameOption) -> &mut Self {
        self.append_security_header(value)
    }

    /// Append `Referrer-Policy`
    fn set_referrer_policy(&mut self, value: ReferrerPolicy) -> &mut Self {
        self.append_security_header(value)
    }

    /// Append `Cross-Origin-Opener-Policy`
    fn set_opener_policy(&mut self, value: OpenerPolicy) -> &mut Self {
        self.append_security_header(value)
    }

    /// Append `Cross-Origin-Embedder-Policy`
    fn set_embedder_policy(&mut self, value: EmbedderPolicy) -> &mut Self {
        self.append_security_header(value)
    }

    /// Append `Cross-Origin-Resource-Policy`
    fn set_resource_policy(&mut self, value: ResourcePolicy) -> &mut Self {
        self.append_security_header(value)
    }
}

impl SecurityHeadersExt for HeaderMap {
    fn append_security_header<H: SecurityHeader>(&mut self, value: H) -> &mut Self {
        self.append(H::NAME, value.header_value());
        self
    }
}

impl<B> SecurityHeadersExt for Response<B> {
    fn append_security_header<H: SecurityHeader>(&mut self, value: H) -> &mut Self {
        self.headers_mut().append_security_header(value);
        self
    }
}
