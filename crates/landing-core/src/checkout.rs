//! Checkout Session Initiation
//!
//! Turns a single user activation into one session-creation call followed by
//! a full-page redirect to the hosted checkout.
//!
//! ```text
//! idle ──activate──▶ pending ──settled──▶ idle ──ok──▶ redirect
//!                       │                   └──err──▶ log
//!                       └──activate──▶ ignored
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SiteError};

/// Checkout mode sent to the session endpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// One-time payment
    #[default]
    Payment,
    /// Recurring subscription
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl std::str::FromStr for CheckoutMode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "payment" => Ok(CheckoutMode::Payment),
            "subscription" => Ok(CheckoutMode::Subscription),
            other => Err(SiteError::Config(format!("unknown checkout mode '{other}'"))),
        }
    }
}

impl std::fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a session-creation call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Product/price being purchased (never empty)
    pub price_id: String,

    /// Where the hosted checkout returns after payment
    pub success_url: String,

    /// Where the hosted checkout returns on cancel
    pub cancel_url: String,

    pub mode: CheckoutMode,
}

impl CheckoutRequest {
    /// Build a request returning to `return_url` on both success and cancel.
    pub fn new(price_id: impl Into<String>, mode: CheckoutMode, return_url: &str) -> Result<Self> {
        let price_id = price_id.into();
        validate_price_id(&price_id)?;

        Ok(Self {
            price_id,
            success_url: return_url.to_string(),
            cancel_url: return_url.to_string(),
            mode,
        })
    }
}

fn validate_price_id(price_id: &str) -> Result<()> {
    if price_id.trim().is_empty() {
        return Err(SiteError::InvalidRequest("price identifier is empty".into()));
    }
    Ok(())
}

/// Session endpoint reply
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub url: Option<String>,
}

impl CheckoutSession {
    /// Extract the redirect target, rejecting a missing or blank `url`.
    pub fn redirect_url(self) -> Result<String> {
        match self.url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            Some(_) => Err(SiteError::InvalidResponse("empty checkout url".into())),
            None => Err(SiteError::InvalidResponse("response has no checkout url".into())),
        }
    }
}

/// Creates checkout sessions (Strategy pattern)
///
/// Futures are not required to be `Send`: in the browser the call runs on the
/// single UI thread.
#[async_trait(?Send)]
pub trait SessionClient: Send + Sync {
    /// Create a session and return the URL to redirect to
    async fn create_session(&self, request: &CheckoutRequest) -> Result<String>;
}

/// The page the initiator lives in
pub trait BrowsingContext: Send + Sync {
    /// Full URL of the current page
    fn current_url(&self) -> String;

    /// Replace the current location. Terminal when it succeeds.
    fn assign(&self, url: &str);
}

/// Price and mode used by [`CheckoutInitiator::activate_default`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDefaults {
    pub price_id: String,
    #[serde(default)]
    pub mode: CheckoutMode,
}

/// Outcome of one activation
#[derive(Debug)]
pub enum Activation {
    /// Session created, browsing context sent to the URL
    Redirected(String),

    /// A request was already in flight; nothing was dispatched
    Ignored,

    /// Request failed and was logged; no redirect happened
    Failed(SiteError),
}

impl Activation {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Activation::Redirected(_))
    }
}

type PendingObserver = Box<dyn Fn(bool) + Send + Sync>;

/// Busy-flag owning checkout trigger
pub struct CheckoutInitiator {
    client: Arc<dyn SessionClient>,
    context: Arc<dyn BrowsingContext>,
    defaults: CheckoutDefaults,
    pending: AtomicBool,
    observer: Option<PendingObserver>,
}

impl CheckoutInitiator {
    pub fn new(
        client: Arc<dyn SessionClient>,
        context: Arc<dyn BrowsingContext>,
        defaults: CheckoutDefaults,
    ) -> Self {
        Self {
            client,
            context,
            defaults,
            pending: AtomicBool::new(false),
            observer: None,
        }
    }

    /// Call `observer` on every busy-flag transition
    pub fn with_pending_observer(mut self, observer: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Activate with the configured price and mode
    pub async fn activate_default(&self) -> Activation {
        let CheckoutDefaults { price_id, mode } = self.defaults.clone();
        self.activate(&price_id, mode).await
    }

    /// Request a session for `price_id` and redirect to it.
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`Activation::Failed`]. While a request is in flight further calls
    /// return [`Activation::Ignored`] without dispatching; the busy check
    /// comes before price validation.
    pub async fn activate(&self, price_id: &str, mode: CheckoutMode) -> Activation {
        if self.is_pending() {
            tracing::debug!(price_id, "Checkout already in flight, ignoring activation");
            return Activation::Ignored;
        }

        if let Err(err) = validate_price_id(price_id) {
            tracing::error!(error = %err, kind = err.kind(), "Refusing to start checkout");
            return Activation::Failed(err);
        }

        let Some(guard) = self.begin() else {
            tracing::debug!(price_id, "Checkout already in flight, ignoring activation");
            return Activation::Ignored;
        };

        let result = self.request_session(price_id, mode).await;

        // Idle again before navigating, in case navigation is suppressed.
        drop(guard);

        match result {
            Ok(url) => {
                tracing::info!(url = %url, "Redirecting to checkout");
                self.context.assign(&url);
                Activation::Redirected(url)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    kind = err.kind(),
                    price_id,
                    "Checkout session request failed"
                );
                Activation::Failed(err)
            }
        }
    }

    async fn request_session(&self, price_id: &str, mode: CheckoutMode) -> Result<String> {
        let request = CheckoutRequest::new(price_id, mode, &self.context.current_url())?;

        tracing::info!(
            price_id = %request.price_id,
            mode = %request.mode,
            "Creating checkout session"
        );

        self.client.create_session(&request).await
    }

    fn begin(&self) -> Option<PendingGuard<'_>> {
        self.pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        self.notify(true);
        Some(PendingGuard { initiator: self })
    }

    fn notify(&self, pending: bool) {
        if let Some(observer) = &self.observer {
            observer(pending);
        }
    }
}

/// Clears the busy flag when dropped, including when the activation future
/// is dropped mid-flight.
struct PendingGuard<'a> {
    initiator: &'a CheckoutInitiator,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.initiator.pending.store(false, Ordering::SeqCst);
        self.initiator.notify(false);
    }
}
