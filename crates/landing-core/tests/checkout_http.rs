//! Checkout flow against a mock session endpoint

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use landing_core::{
    Activation, BrowsingContext, CheckoutDefaults, CheckoutInitiator, CheckoutMode,
    HttpSessionClient, SiteConfig, SiteError,
};
use serde_json::json;
use tracing_subscriber::layer::SubscriberExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "https://launchpad.test/#pricing";
const CHECKOUT_PATH: &str = "/api/stripe/create-checkout";

#[derive(Default)]
struct Page {
    assigned: Mutex<Vec<String>>,
}

impl BrowsingContext for Page {
    fn current_url(&self) -> String {
        PAGE.into()
    }

    fn assign(&self, url: &str) {
        self.assigned.lock().unwrap().push(url.to_string());
    }
}

#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl ErrorCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

fn initiator(server: &MockServer, page: Arc<Page>) -> CheckoutInitiator {
    let client = HttpSessionClient::from_config(&SiteConfig::default(), &server.uri());
    CheckoutInitiator::new(
        Arc::new(client),
        page,
        CheckoutDefaults {
            price_id: "price_1".into(),
            mode: CheckoutMode::Payment,
        },
    )
}

#[tokio::test]
async fn redirects_to_returned_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHECKOUT_PATH))
        .and(body_json(json!({
            "priceId": "price_1",
            "successUrl": PAGE,
            "cancelUrl": PAGE,
            "mode": "subscription",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"url": "https://pay.example/session/abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = Arc::new(Page::default());
    let initiator = initiator(&server, page.clone());

    let outcome = initiator.activate("price_1", CheckoutMode::Subscription).await;

    assert!(outcome.is_redirect());
    assert!(!initiator.is_pending());
    assert_eq!(
        *page.assigned.lock().unwrap(),
        vec!["https://pay.example/session/abc".to_string()]
    );
}

#[tokio::test]
async fn server_error_is_logged_once_without_redirect() {
    let counter = ErrorCounter::default();
    let _log = tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHECKOUT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Stripe is down"})))
        .mount(&server)
        .await;

    let page = Arc::new(Page::default());
    let initiator = initiator(&server, page.clone());

    let outcome = initiator.activate_default().await;

    match outcome {
        Activation::Failed(SiteError::UpstreamRejected { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Stripe is down");
        }
        other => panic!("expected upstream rejection, got {other:?}"),
    }
    assert!(!initiator.is_pending());
    assert!(page.assigned.lock().unwrap().is_empty());
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn missing_url_is_invalid_response() {
    let counter = ErrorCounter::default();
    let _log = tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHECKOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let page = Arc::new(Page::default());
    let initiator = initiator(&server, page.clone());

    let outcome = initiator.activate_default().await;

    assert!(matches!(outcome, Activation::Failed(SiteError::InvalidResponse(_))));
    assert!(!initiator.is_pending());
    assert!(page.assigned.lock().unwrap().is_empty());
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_network_failure() {
    let counter = ErrorCounter::default();
    let _log = tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));

    // Reserve a port, then free it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{port}");

    let page = Arc::new(Page::default());
    let client = HttpSessionClient::new(format!("{uri}{CHECKOUT_PATH}"));
    let initiator = CheckoutInitiator::new(
        Arc::new(client),
        page.clone(),
        CheckoutDefaults {
            price_id: "price_1".into(),
            mode: CheckoutMode::Payment,
        },
    );

    let outcome = initiator.activate_default().await;

    assert!(matches!(outcome, Activation::Failed(SiteError::NetworkFailure(_))));
    assert!(!initiator.is_pending());
    assert!(page.assigned.lock().unwrap().is_empty());
    assert_eq!(counter.count(), 1);
}
