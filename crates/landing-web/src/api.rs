//! Browser Adapters

use std::sync::Arc;

use landing_core::{
    BrowsingContext, CheckoutDefaults, CheckoutInitiator, HttpSessionClient, SiteConfig,
};

/// The current browser tab
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserContext;

impl BrowserContext {
    /// Page origin, used to resolve a relative API base
    pub fn origin(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into())
    }
}

impl BrowsingContext for BrowserContext {
    fn current_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| self.origin())
    }

    fn assign(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window to redirect");
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            tracing::warn!(error = ?e, "Redirect failed");
        }
    }
}

/// Checkout initiator talking to the configured session endpoint
pub fn checkout_initiator(config: &SiteConfig, defaults: CheckoutDefaults) -> CheckoutInitiator {
    let context = BrowserContext;
    let client = HttpSessionClient::from_config(config, &context.origin());

    CheckoutInitiator::new(Arc::new(client), Arc::new(context), defaults)
}
