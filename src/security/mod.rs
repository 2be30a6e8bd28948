//! Security response headers.
//!
//! Closed value sets for X-Content-Type-Options, X-Frame-Options,
//! Referrer-Policy and the Cross-Origin-* policies, with two ways to apply
//! them: direct setters on a response ([`SecurityHeadersExt`]) and tower
//! layers composed into a router ([`SecurityHeadersRouterExt`]).
//!
//! Headers are appended, never overwritten.

mod config;
mod layer;
mod response;
mod types;

pub use config::{SecurityHeadersConfig, SecurityHeadersConfigBuilder};
pub use layer::{
    ContentTypeOptionsLayer, EmbedderPolicyLayer, FrameOptionsLayer, OpenerPolicyLayer,
    ReferrerPolicyLayer, ResourcePolicyLayer, SecurityHeaderLayer, SecurityHeaderService,
    SecurityHeadersRouterExt, apply_security_headers,
};
pub use response::SecurityHeadersExt;
pub use types::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
    SecurityHeader,
};
