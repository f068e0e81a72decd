//! Site Configuration
//!
//! Static inputs handed to components at construction instead of being read
//! from module-level globals.

use serde::{Deserialize, Serialize};

use crate::checkout::{CheckoutDefaults, CheckoutMode};
use crate::error::Result;

/// Environment variable prefix for [`SiteConfig::from_env`]
pub const ENV_PREFIX: &str = "LAUNCHPAD_";

/// Configuration for the landing site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// API root, absolute or relative to the page origin
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Session-creation route under `api_base`
    #[serde(default = "default_checkout_path")]
    pub checkout_path: String,

    /// Price purchased by checkout buttons without an explicit price
    #[serde(default = "default_price_id")]
    pub default_price_id: String,

    #[serde(default)]
    pub default_mode: CheckoutMode,

    /// External scheduling link used by "book a call" buttons
    #[serde(default = "default_booking_url")]
    pub booking_url: String,
}

fn default_api_base() -> String {
    "/api".into()
}

fn default_checkout_path() -> String {
    "/stripe/create-checkout".into()
}

fn default_price_id() -> String {
    "price_1Niyy5AxyNprDp7iZIqEyD2h".into()
}

fn default_booking_url() -> String {
    "https://cal.com/mindcapsule/30min?date=2024-06-11&month=2024-06".into()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            checkout_path: default_checkout_path(),
            default_price_id: default_price_id(),
            default_mode: CheckoutMode::default(),
            booking_url: default_booking_url(),
        }
    }
}

impl SiteConfig {
    /// Load from `LAUNCHPAD_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup (process env, build-time env, ...).
    ///
    /// Keys are `LAUNCHPAD_API_BASE`, `LAUNCHPAD_CHECKOUT_PATH`,
    /// `LAUNCHPAD_PRICE_ID`, `LAUNCHPAD_MODE` and `LAUNCHPAD_BOOKING_URL`.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.trim().is_empty())
        };

        let mut config = Self::default();
        if let Some(api_base) = get("API_BASE") {
            config.api_base = api_base;
        }
        if let Some(path) = get("CHECKOUT_PATH") {
            config.checkout_path = path;
        }
        if let Some(price_id) = get("PRICE_ID") {
            config.default_price_id = price_id;
        }
        if let Some(mode) = get("MODE") {
            config.default_mode = mode.parse()?;
        }
        if let Some(url) = get("BOOKING_URL") {
            config.booking_url = url;
        }

        Ok(config)
    }

    /// Price and mode for checkout buttons
    pub fn checkout_defaults(&self) -> CheckoutDefaults {
        CheckoutDefaults {
            price_id: self.default_price_id.clone(),
            mode: self.default_mode,
        }
    }

    /// Absolute session endpoint; a relative `api_base` is joined to `origin`
    pub fn checkout_endpoint(&self, origin: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = self.checkout_path.trim_start_matches('/');

        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{base}/{path}")
        } else {
            let origin = origin.trim_end_matches('/');
            let base = base.trim_start_matches('/');
            if base.is_empty() {
                format!("{origin}/{path}")
            } else {
                format!("{origin}/{base}/{path}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.default_mode, CheckoutMode::Payment);
        assert!(config.booking_url.starts_with("https://cal.com/"));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("LAUNCHPAD_PRICE_ID", "price_pro"),
            ("LAUNCHPAD_MODE", "subscription"),
            ("LAUNCHPAD_BOOKING_URL", " "),
        ]))
        .unwrap();

        assert_eq!(config.default_price_id, "price_pro");
        assert_eq!(config.default_mode, CheckoutMode::Subscription);
        assert_eq!(config.booking_url, SiteConfig::default().booking_url);

        let defaults = config.checkout_defaults();
        assert_eq!(defaults.price_id, "price_pro");
        assert_eq!(defaults.mode, CheckoutMode::Subscription);
    }

    #[test]
    fn test_invalid_mode_is_config_error() {
        let err = SiteConfig::from_lookup(lookup(&[("LAUNCHPAD_MODE", "weekly")])).unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_from_env_without_overrides() {
        if std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)) {
            return;
        }
        assert_eq!(SiteConfig::from_env().unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_checkout_endpoint() {
        let config = SiteConfig::default();
        assert_eq!(
            config.checkout_endpoint("https://launchpad.test/"),
            "https://launchpad.test/api/stripe/create-checkout"
        );

        let absolute = SiteConfig {
            api_base: "https://api.launchpad.test/v1/".into(),
            ..SiteConfig::default()
        };
        assert_eq!(
            absolute.checkout_endpoint("https://launchpad.test"),
            "https://api.launchpad.test/v1/stripe/create-checkout"
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"default_mode": "subscription"}"#).unwrap();
        assert_eq!(config.default_mode, CheckoutMode::Subscription);
        assert_eq!(config.checkout_path, "/stripe/create-checkout");
    }
}
