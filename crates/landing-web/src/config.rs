//! Build-time Configuration

use landing_core::SiteConfig;

/// Site config baked in at compile time from `LAUNCHPAD_*` variables
pub fn site_config() -> SiteConfig {
    SiteConfig::from_lookup(build_env).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid build configuration, using defaults");
        SiteConfig::default()
    })
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "LAUNCHPAD_API_BASE" => option_env!("LAUNCHPAD_API_BASE"),
        "LAUNCHPAD_CHECKOUT_PATH" => option_env!("LAUNCHPAD_CHECKOUT_PATH"),
        "LAUNCHPAD_PRICE_ID" => option_env!("LAUNCHPAD_PRICE_ID"),
        "LAUNCHPAD_MODE" => option_env!("LAUNCHPAD_MODE"),
        "LAUNCHPAD_BOOKING_URL" => option_env!("LAUNCHPAD_BOOKING_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
