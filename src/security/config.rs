use super::types::{
    ContentTypeOption, EmbedderPolicy, FrameOption, OpenerPolicy, ReferrerPolicy, ResourcePolicy,
};
use crate::error::{EssentialsError, Result};
use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Security headers configuration
///
/// Each header is optional; `None` means the header is not applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityHeadersConfig {
    /// Whether security headers are applied at all
    pub enabled: bool,

    /// X-Content-Type-Options header value
    pub content_type_options: Option<ContentTypeOption>,

    /// X-Frame-Options header value
    pub frame_options: Option<FrameOption>,

    /// Referrer-Policy header value
    pub referrer_policy: Option<ReferrerPolicy>,

    /// Cross-Origin-Opener-Policy header value
    pub opener_policy: Option<OpenerPolicy>,

    /// Cross-Origin-Embedder-Policy header value
    /// Enabling `require-corp` blocks cross-origin resources without CORP/CORS
    pub embedder_policy: Option<EmbedderPolicy>,

    /// Cross-Origin-Resource-Policy header value
    pub resource_policy: Option<ResourcePolicy>,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            content_type_options: Some(ContentTypeOption::NoSniff),
            frame_options: Some(FrameOption::Deny),
            referrer_policy: Some(ReferrerPolicy::StrictOriginWhenCrossOrigin),
            opener_policy: None,
            embedder_policy: None,
            resource_policy: None,
        }
    }
}

impl SecurityHeadersConfig {
    /// Create a new SecurityHeadersConfig builder
    pub fn builder() -> SecurityHeadersConfigBuilder {
        SecurityHeadersConfigBuilder::new()
    }

    /// Configuration with every header cleared
    pub fn none() -> Self {
        Self {
            enabled: true,
            content_type_options: None,
            frame_options: None,
            referrer_policy: None,
            opener_policy: None,
            embedder_policy: None,
            resource_policy: None,
        }
    }

    /// Load security header configuration from environment variables
    ///
    /// Unrecognized values are logged and the default for that header is kept.
    /// Use [`SecurityHeadersConfig::try_from_env`] to reject them instead.
    pub fn from_env() -> Self {
        Self::load_env(false).unwrap_or_default()
    }

    /// Load security header configuration from environment variables,
    /// failing on the first unrecognized value
    ///
    /// # Errors
    ///
    /// Returns [`EssentialsError::UnrecognizedValue`] when a variable names
    /// a value outside the header's value set.
    pub fn try_from_env() -> Result<Self> {
        Self::load_env(true)
    }

    fn load_env(strict: bool) -> Result<Self> {
        let mut config = Self::default();

        if let Some(enabled) = get_env_with_prefix("SECURITY_ENABLED") {
            config.enabled = enabled.parse().unwrap_or(true);
        }

        config.content_type_options =
            resolve_env("CONTENT_TYPE_OPTIONS", config.content_type_options, strict)?;
        config.frame_options = resolve_env("FRAME_OPTIONS", config.frame_options, strict)?;
        config.referrer_policy = resolve_env("REFERRER_POLICY", config.referrer_policy, strict)?;
        config.opener_policy = resolve_env("OPENER_POLICY", config.opener_policy, strict)?;
        config.embedder_policy = resolve_env("EMBEDDER_POLICY", config.embedder_policy, strict)?;
        config.resource_policy = resolve_env("RESOURCE_POLICY", config.resource_policy, strict)?;

        Ok(config)
    }

    /// Number of headers that will be applied
    pub fn header_count(&self) -> usize {
        if !self.enabled {
            return 0;
        }

        [
            self.content_type_options.is_some(),
            self.frame_options.is_some(),
            self.referrer_policy.is_some(),
            self.opener_policy.is_some(),
            self.embedder_policy.is_some(),
            self.resource_policy.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// Read one header override from the environment.
///
/// `off`, `disable` and `none` clear the header.
fn resolve_env<T>(key: &str, current: Option<T>, strict: bool) -> Result<Option<T>>
where
    T: FromStr<Err = EssentialsError> + Copy,
{
    let Some(raw) = get_env_with_prefix(key) else {
        return Ok(current);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "off" | "disable" | "none" => return Ok(None),
        _ => {}
    }

    match raw.parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(err) if strict => Err(err),
        Err(err) => {
            tracing::warn!(key, error = %err, "Ignoring invalid security header setting");
            Ok(current)
        }
    }
}

/// Builder for SecurityHeadersConfig
#[must_use = "builder does nothing until you call build()"]
pub struct SecurityHeadersConfigBuilder {
    config: SecurityHeadersConfig,
}

impl SecurityHeadersConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SecurityHeadersConfig::default(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub fn content_type_options(mut self, value: ContentTypeOption) -> Self {
        self.config.content_type_options = Some(value);
        self
    }

    pub fn nosniff(self) -> Self {
        self.content_type_options(ContentTypeOption::NoSniff)
    }

    pub fn disable_content_type_options(mut self) -> Self {
        self.config.content_type_options = None;
        self
    }

    pub fn frame_options(mut self, value: FrameOption) -> Self {
        self.config.frame_options = Some(value);
        self
    }

    pub fn deny_framing(self) -> Self {
        self.frame_options(FrameOption::Deny)
    }

    pub fn same_origin_framing(self) -> Self {
        self.frame_options(FrameOption::SameOrigin)
    }

    /// Omit X-Frame-Options so any site may frame the page
    pub fn allow_framing(mut self) -> Self {
        self.config.frame_options = None;
        self
    }

    pub fn referrer_policy(mut self, value: ReferrerPolicy) -> Self {
        self.config.referrer_policy = Some(value);
        self
    }

    pub fn disable_referrer_policy(mut self) -> Self {
        self.config.referrer_policy = None;
        self
    }

    pub fn opener_policy(mut self, value: OpenerPolicy) -> Self {
        self.config.opener_policy = Some(value);
        self
    }

    pub fn disable_opener_policy(mut self) -> Self {
        self.config.opener_policy = None;
        self
    }

    pub fn embedder_policy(mut self, value: EmbedderPolicy) -> Self {
        self.config.embedder_policy = Some(value);
        self
    }

    pub fn disable_embedder_policy(mut self) -> Self {
        self.config.embedder_policy = None;
        self
    }

    pub fn resource_policy(mut self, value: ResourcePolicy) -> Self {
        self.config.resource_policy = Some(value);
        self
    }

    pub fn disable_resource_policy(mut self) -> Self {
        self.config.resource_policy = None;
        self
    }

    /// Same-origin isolation: COOP `same-origin` plus COEP `require-corp`
    pub fn cross_origin_isolated(self) -> Self {
        self.opener_policy(OpenerPolicy::SameOrigin)
            .embedder_policy(EmbedderPolicy::RequireCorp)
    }

    pub fn build(self) -> SecurityHeadersConfig {
        self.config
    }
}

impl Default for SecurityHeadersConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SecurityHeadersConfig::default();
        assert!(config.enabled);
        assert_eq!(config.content_type_options, Some(ContentTypeOption::NoSniff));
        assert_eq!(config.frame_options, Some(FrameOption::Deny));
        assert_eq!(
            config.referrer_policy,
            Some(ReferrerPolicy::StrictOriginWhenCrossOrigin)
        );
        assert_eq!(config.opener_policy, None);
        assert_eq!(config.header_count(), 3);
    }

    #[test]
    fn test_builder() {
        let config = SecurityHeadersConfig::builder()
            .same_origin_framing()
            .referrer_policy(ReferrerPolicy::NoReferrer)
            .cross_origin_isolated()
            .resource_policy(ResourcePolicy::SameSite)
            .build();

        assert_eq!(config.frame_options, Some(FrameOption::SameOrigin));
        assert_eq!(config.referrer_policy, Some(ReferrerPolicy::NoReferrer));
        assert_eq!(config.opener_policy, Some(OpenerPolicy::SameOrigin));
        assert_eq!(config.embedder_policy, Some(EmbedderPolicy::RequireCorp));
        assert_eq!(config.resource_policy, Some(ResourcePolicy::SameSite));
        assert_eq!(config.header_count(), 6);
    }

    #[test]
    fn test_disabled_config_applies_nothing() {
        let config = SecurityHeadersConfig::builder().enabled(false).build();
        assert_eq!(config.header_count(), 0);
        assert_eq!(SecurityHeadersConfig::none().header_count(), 0);
    }

    #[test]
    fn test_allow_framing() {
        let config = SecurityHeadersConfig::builder().allow_framing().build();
        assert_eq!(config.frame_options, None);
    }

    #[test]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var("ESSENTIALS_FRAME_OPTIONS", "SAMEORIGIN");
            std::env::set_var("ESSENTIALS_REFERRER_POLICY", "off");
            std::env::set_var("ESSENTIALS_OPENER_POLICY", "same-origin-allow-popups");
            std::env::set_var("ESSENTIALS_RESOURCE_POLICY", "everywhere");
        }

        let config = SecurityHeadersConfig::from_env();
        assert_eq!(config.frame_options, Some(FrameOption::SameOrigin));
        assert_eq!(config.referrer_policy, None);
        assert_eq!(config.opener_policy, Some(OpenerPolicy::SameOriginAllowPopups));
        assert_eq!(config.resource_policy, None);

        let err = SecurityHeadersConfig::try_from_env().unwrap_err();
        assert!(matches!(
            err,
            EssentialsError::UnrecognizedValue { header: "Cross-Origin-Resource-Policy", .. }
        ));

        unsafe {
            std::env::remove_var("ESSENTIALS_FRAME_OPTIONS");
            std::env::remove_var("ESSENTIALS_REFERRER_POLICY");
            std::env::remove_var("ESSENTIALS_OPENER_POLICY");
            std::env::remove_var("ESSENTIALS_RESOURCE_POLICY");
        }
    }
}
