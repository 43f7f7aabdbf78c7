//! Site configuration.
//!
//! The email relay credentials are client-side values baked in at compile
//! time. A build without them still runs; every contact submission then
//! ends in the generic error banner.

/// Default API base of the hosted email relay.
pub const DEFAULT_RELAY_API: &str = "https://api.emailjs.com";

/// Storage key of the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Credentials and endpoint of the hosted email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public client key; sent as `user_id`.
    pub public_key: String,
    pub api_base: String,
}

impl RelayConfig {
    /// Reads the credentials captured at compile time.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("FOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or_default()
                .to_string(),
            template_id: option_env!("FOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            public_key: option_env!("FOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or_default()
                .to_string(),
            api_base: option_env!("FOLIO_EMAILJS_API")
                .unwrap_or(DEFAULT_RELAY_API)
                .to_string(),
        }
    }

    /// Returns whether all three credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }

    /// Full URL of the send endpoint.
    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_base.trim_end_matches('/'))
    }
}

/// Top-level configuration handed to the app at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub theme_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay: RelayConfig::from_build_env(),
            theme_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay(service: &str, template: &str, key: &str) -> RelayConfig {
        RelayConfig {
            service_id: service.to_string(),
            template_id: template.to_string(),
            public_key: key.to_string(),
            api_base: "https://relay.test/".to_string(),
        }
    }

    #[test]
    fn test_is_configured() {
        assert!(relay("service_a", "template_b", "key").is_configured());
        assert!(!relay("", "template_b", "key").is_configured());
        assert!(!relay("service_a", "  ", "key").is_configured());
    }

    #[test]
    fn test_send_url_trims_slash() {
        assert_eq!(
            relay("s", "t", "k").send_url(),
            "https://relay.test/api/v1.0/email/send"
        );
    }
}
