//! Closed value sets for the security response headers.
//!
//! Every enum maps each of its variants to exactly one lowercase literal,
//! which is both the header value on the wire and the serde representation.

use axum::http::{HeaderName, HeaderValue, header};
use serde::{Deserialize, Serialize};

use crate::error::EssentialsError;

/// A header whose permitted values form a closed enumeration.
pub trait SecurityHeader: Copy + Send + Sync + 'static {
    /// Header name this value is written under.
    const NAME: HeaderName;

    /// Canonical literal for this value.
    fn as_str(&self) -> &'static str;

    /// Header value for this variant
    fn header_value(&self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}

macro_rules! header_value_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $header:expr, $label:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical literal written to the header.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl SecurityHeader for $name {
            const NAME: HeaderName = $header;

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = EssentialsError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(EssentialsError::unrecognized($label, s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

header_value_enum! {
    /// X-Content-Type-Options value.
    ///
    /// Tells the browser to trust the advertised `Content-Type` and not
    /// sniff the body for a different MIME type. Applies the strict MIME
    /// checks to `style` and `script` destinations.
    pub enum ContentTypeOption => header::X_CONTENT_TYPE_OPTIONS, "X-Content-Type-Options" {
        /// Block MIME sniffing
        NoSniff => "nosniff",
    }
}

header_value_enum! {
    /// X-Frame-Options value.
    ///
    /// Controls whether the page may be rendered inside a `<frame>`,
    /// `<iframe>`, `<embed>` or `<object>`, protecting against click-jacking.
    pub enum FrameOption => header::X_FRAME_OPTIONS, "X-Frame-Options" {
        /// Never render in a frame
        Deny => "deny",
        /// Only render in a frame on the same origin
        SameOrigin => "sameorigin",
    }
}

header_value_enum! {
    /// Referrer-Policy value.
    ///
    /// Controls how much referrer information is sent with requests that
    /// originate from the page.
    pub enum ReferrerPolicy => header::REFERRER_POLICY, "Referrer-Policy" {
        /// Omit the Referer header entirely
        NoReferrer => "no-referrer",
        /// Send the full URL unless the request downgrades from HTTPS to HTTP
        NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
        /// Send only the origin
        Origin => "origin",
        /// Full URL for same-origin requests, origin only otherwise
        OriginWhenCrossOrigin => "origin-when-cross-origin",
        /// Full URL for same-origin requests, nothing for cross-origin
        SameOrigin => "same-origin",
        /// Origin only, and nothing when downgrading
        StrictOrigin => "strict-origin",
        /// Full URL same-origin, origin cross-origin, nothing when downgrading
        StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
    }
}

header_value_enum! {
    /// Cross-Origin-Opener-Policy (COOP) value.
    ///
    /// Decides whether a top-level document shares its browsing context
    /// group with cross-origin documents. `same-origin` isolates the
    /// document so a cross-origin opener gets no reference to its window.
    pub enum OpenerPolicy => HeaderName::from_static("cross-origin-opener-policy"), "Cross-Origin-Opener-Policy" {
        /// Browser default, no isolation
        UnsafeNone => "unsafe-none",
        /// Isolate to same-origin documents
        SameOrigin => "same-origin",
        /// Isolate, but keep references to opened popups
        SameOriginAllowPopups => "same-origin-allow-popups",
    }
}

header_value_enum! {
    /// Cross-Origin-Embedder-Policy (COEP) value.
    pub enum EmbedderPolicy => HeaderName::from_static("cross-origin-embedder-policy"), "Cross-Origin-Embedder-Policy" {
        /// Browser default: load cross-origin resources without explicit permission
        UnsafeNone => "unsafe-none",
        /// Only load cross-origin resources that opt in via CORP or CORS
        RequireCorp => "require-corp",
    }
}

header_value_enum! {
    /// Cross-Origin-Resource-Policy (CORP) value.
    ///
    /// Asks the browser to block no-cors cross-origin or cross-site loads of
    /// the resource.
    pub enum ResourcePolicy => HeaderName::from_static("cross-origin-resource-policy"), "Cross-Origin-Resource-Policy" {
        SameSite => "same-site",
        SameOrigin => "same-origin",
        CrossOrigin => "cross-origin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_option_literals() {
        assert_eq!(FrameOption::Deny.as_str(), "deny");
        assert_eq!(FrameOption::SameOrigin.as_str(), "sameorigin");
    }

    #[test]
    fn test_referrer_policy_literals() {
        let literals: Vec<&str> = ReferrerPolicy::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            literals,
            vec![
                "no-referrer",
                "no-referrer-when-downgrade",
                "origin",
                "origin-when-cross-origin",
                "same-origin",
                "strict-origin",
                "strict-origin-when-cross-origin",
            ]
        );
    }

    #[test]
    fn test_cross_origin_literals() {
        assert_eq!(OpenerPolicy::SameOriginAllowPopups.as_str(), "same-origin-allow-popups");
        assert_eq!(EmbedderPolicy::RequireCorp.as_str(), "require-corp");
        assert_eq!(ResourcePolicy::SameSite.as_str(), "same-site");
        assert_eq!(ResourcePolicy::CrossOrigin.as_str(), "cross-origin");
    }

    #[test]
    fn test_header_names() {
        assert_eq!(ContentTypeOption::NAME, "x-content-type-options");
        assert_eq!(FrameOption::NAME, "x-frame-options");
        assert_eq!(ReferrerPolicy::NAME, "referrer-policy");
        assert_eq!(OpenerPolicy::NAME, "cross-origin-opener-policy");
        assert_eq!(EmbedderPolicy::NAME, "cross-origin-embedder-policy");
        assert_eq!(ResourcePolicy::NAME, "cross-origin-resource-policy");
    }

    #[test]
    fn test_every_literal_is_lowercase_header_value() {
        let literals = ContentTypeOption::ALL
            .iter()
            .map(|v| v.as_str())
            .chain(FrameOption::ALL.iter().map(|v| v.as_str()))
            .chain(ReferrerPolicy::ALL.iter().map(|v| v.as_str()))
            .chain(OpenerPolicy::ALL.iter().map(|v| v.as_str()))
            .chain(EmbedderPolicy::ALL.iter().map(|v| v.as_str()))
            .chain(ResourcePolicy::ALL.iter().map(|v| v.as_str()));

        for literal in literals {
            assert_eq!(literal, literal.to_ascii_lowercase());
            assert!(HeaderValue::from_str(literal).is_ok());
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("DENY".parse::<FrameOption>().unwrap(), FrameOption::Deny);
        assert_eq!(
            " Strict-Origin ".parse::<ReferrerPolicy>().unwrap(),
            ReferrerPolicy::StrictOrigin
        );
        assert_eq!("nosniff".parse::<ContentTypeOption>().unwrap(), ContentTypeOption::NoSniff);
    }

    #[test]
    fn test_from_str_rejects_unknown_value() {
        let err = "allow-from".parse::<FrameOption>().unwrap_err();
        match err {
            EssentialsError::UnrecognizedValue { header, value } => {
                assert_eq!(header, "X-Frame-Options");
                assert_eq!(value, "allow-from");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_matches_literal() {
        assert_eq!(OpenerPolicy::UnsafeNone.to_string(), "unsafe-none");
        assert_eq!(ReferrerPolicy::NoReferrer.to_string(), "no-referrer");
    }
}
