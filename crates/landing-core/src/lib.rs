//! # landing-core
//!
//! Target-agnostic state machines behind the launchpad landing site.
//!
//! ## Components
//!
//! ```text
//! ┌──────────────────────────────┐    ┌──────────────────────────────┐
//! │      CheckoutInitiator       │    │   ExclusiveDisclosureList    │
//! │  busy flag ─▶ SessionClient  │    │  selected index ─▶ BodyStyle │
//! │            ─▶ BrowsingContext│    │                 ─▶ MediaSlot │
//! └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! The two components share no state. `SessionClient` and `BrowsingContext`
//! are the seams to the backend and the page; `HttpSessionClient` is the
//! reqwest-backed client used by the web front end.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use landing_core::{CheckoutInitiator, HttpSessionClient, SiteConfig};
//!
//! let config = SiteConfig::from_env()?;
//! let client = HttpSessionClient::from_config(&config, "https://launchpad.dev");
//! let initiator = CheckoutInitiator::new(
//!     Arc::new(client),
//!     Arc::new(page),
//!     config.checkout_defaults(),
//! );
//!
//! // Redirects on success, logs on failure
//! initiator.activate_default().await;
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod media;

pub use checkout::{
    Activation, BrowsingContext, CheckoutDefaults, CheckoutInitiator, CheckoutMode,
    CheckoutRequest, CheckoutSession, SessionClient,
};
pub use client::HttpSessionClient;
pub use config::SiteConfig;
pub use disclosure::{BodyStyle, DisclosureItem, ExclusiveDisclosureList, MaxHeight};
pub use error::{Result, SiteError};
pub use media::{Media, MediaSlot};
