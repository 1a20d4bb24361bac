#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the lookup flow: controller + scripted gateway.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use orderscope_core::error::GatewayError;
use orderscope_core::{
    DisplayState, FetchedOrder, LookupController, Order, OrderGateway, Slot, location, run_lookup,
};

// ===== Mock Implementations =====

/// Scripted gateway: canned responses per identifier, records every call.
struct MockGateway {
    responses: RwLock<HashMap<String, orderscope_gateway::Result<FetchedOrder>>>,
    calls: RwLock<Vec<String>>,
}

impl MockGateway {
    fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Script a successful lookup for `identifier`.
    fn with_order(self, identifier: &str, cached: bool) -> Self {
        self.responses.try_write().unwrap().insert(
            identifier.to_string(),
            Ok(FetchedOrder {
                order: sample_order(identifier),
                served_from_cache: cached,
            }),
        );
        self
    }

    /// Script a failing lookup for `identifier`.
    fn with_error(self, identifier: &str, err: GatewayError) -> Self {
        self.responses
            .try_write()
            .unwrap()
            .insert(identifier.to_string(), Err(err));
        self
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl OrderGateway for MockGateway {
    async fn fetch_order(&self, identifier: &str) -> orderscope_gateway::Result<FetchedOrder> {
        self.calls.write().await.push(identifier.to_string());
        self.responses
            .read()
            .await
            .get(identifier)
            .cloned()
            .unwrap_or(Err(GatewayError::Status { status: 404 }))
    }
}

fn sample_order(identifier: &str) -> Order {
    Order {
        id: identifier.to_string(),
        track_number: format!("TRACK-{identifier}"),
        entry: "WBIL".to_string(),
        locale: "en".to_string(),
        internal_signature: String::new(),
        customer_id: "cust-1".to_string(),
        delivery_service: "meest".to_string(),
        shard_key: "9".to_string(),
        shipping_model_id: 99,
        date_created: chrono::Utc::now(),
        out_of_shard: "1".to_string(),
        delivery: None,
        payment: None,
        items: Vec::new(),
    }
}

fn controller_with(gateway: MockGateway) -> (LookupController, Arc<MockGateway>) {
    let gateway = Arc::new(gateway);
    let controller = LookupController::new(gateway.clone(), location::EMPTY_PATH);
    (controller, gateway)
}

// ===== Search flow =====

#[tokio::test]
async fn search_then_success_reaches_result_state() {
    let (mut controller, gateway) = controller_with(MockGateway::new().with_order("ORD-1", true));

    let ticket = controller.search("ORD-1").expect("ticket issued");
    assert_eq!(controller.display_state(), DisplayState::Loading);
    assert!(!controller.presenter().search_enabled());
    assert_eq!(controller.current_path(), "/order/ORD-1");

    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    assert!(controller.apply_outcome(ticket.token, outcome));

    assert_eq!(controller.display_state(), DisplayState::Result);
    assert!(controller.presenter().search_enabled());
    assert_eq!(controller.view_model().slot(Slot::OrderId), Some("ORD-1"));
    assert_eq!(controller.view_model().slot(Slot::DataSource), Some("cache"));
    assert_eq!(gateway.calls().await, vec!["ORD-1".to_string()]);
}

#[tokio::test]
async fn input_is_trimmed_before_lookup() {
    let (mut controller, gateway) = controller_with(MockGateway::new().with_order("ORD-1", false));

    let ticket = controller.search("  ORD-1  ").expect("ticket issued");
    assert_eq!(ticket.identifier, "ORD-1");
    assert_eq!(controller.current_identifier(), "ORD-1");
    assert_eq!(controller.current_path(), "/order/ORD-1");

    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);
    assert_eq!(gateway.calls().await, vec!["ORD-1".to_string()]);
}

#[tokio::test]
async fn empty_input_shows_validation_error_without_network() {
    let (mut controller, gateway) = controller_with(MockGateway::new());

    assert!(controller.search("   ").is_none());

    assert_eq!(controller.display_state(), DisplayState::Error);
    assert_eq!(
        controller.presenter().error_message(),
        Some("identifier required")
    );
    assert_eq!(controller.current_path(), location::EMPTY_PATH);
    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn empty_input_hides_previous_result() {
    let (mut controller, _gateway) = controller_with(MockGateway::new().with_order("ORD-1", false));

    let ticket = controller.search("ORD-1").expect("ticket issued");
    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);
    assert_eq!(controller.display_state(), DisplayState::Result);

    assert!(controller.search("").is_none());
    assert!(!controller.presenter().result_visible());
    assert_eq!(controller.display_state(), DisplayState::Error);
}

// ===== Failure surfacing =====

#[tokio::test]
async fn http_404_surfaces_status_in_message() {
    let (mut controller, _gateway) = controller_with(MockGateway::new());

    let ticket = controller.search("missing").expect("ticket issued");
    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    assert!(controller.apply_outcome(ticket.token, outcome));

    assert_eq!(controller.display_state(), DisplayState::Error);
    let message = controller.presenter().error_message().unwrap();
    assert!(message.contains("404"), "message was: {message}");
}

#[tokio::test]
async fn unsuccessful_envelope_surfaces_invalid_format() {
    let (mut controller, _gateway) =
        controller_with(MockGateway::new().with_error("ORD-1", GatewayError::InvalidFormat));

    let ticket = controller.search("ORD-1").expect("ticket issued");
    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);

    assert_eq!(
        controller.presenter().error_message(),
        Some("invalid response format")
    );
}

#[tokio::test]
async fn completion_clears_loading_on_failure_too() {
    let (mut controller, _gateway) = controller_with(MockGateway::new().with_error(
        "ORD-1",
        GatewayError::Network {
            detail: "connection refused".to_string(),
        },
    ));

    let ticket = controller.search("ORD-1").expect("ticket issued");
    assert!(controller.presenter().is_loading());

    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);

    assert!(!controller.presenter().is_loading());
    assert!(controller.presenter().search_enabled());
    assert_eq!(controller.display_state(), DisplayState::Error);
}

// ===== Address line =====

#[tokio::test]
async fn load_from_current_location_round_trips() {
    let gateway = Arc::new(MockGateway::new().with_order("XYZ123", false));
    let mut controller = LookupController::new(gateway.clone(), "/order/XYZ123");

    let ticket = controller.load_from_current_location().expect("ticket");
    assert_eq!(ticket.identifier, "XYZ123");
    assert_eq!(controller.current_identifier(), "XYZ123");
    assert_eq!(controller.display_state(), DisplayState::Loading);

    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);

    assert_eq!(controller.display_state(), DisplayState::Result);
    assert_eq!(gateway.calls().await, vec!["XYZ123".to_string()]);
}

#[tokio::test]
async fn non_canonical_path_loads_nothing() {
    for path in ["/", "/order", "/order/XYZ123/extra", "/generate"] {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = LookupController::new(gateway.clone(), path);
        assert!(controller.load_from_current_location().is_none(), "{path}");
        assert_eq!(controller.display_state(), DisplayState::Idle, "{path}");
        assert!(gateway.calls().await.is_empty(), "{path}");
    }
}

// ===== History traversal =====

#[tokio::test]
async fn back_and_forward_reload_their_entries() {
    let (mut controller, _gateway) = controller_with(
        MockGateway::new()
            .with_order("A", false)
            .with_order("B", false),
    );

    for id in ["A", "B"] {
        let ticket = controller.search(id).expect("ticket issued");
        let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
        controller.apply_outcome(ticket.token, outcome);
    }
    assert_eq!(controller.current_path(), "/order/B");
    assert!(controller.can_navigate_back());

    let back_ticket = controller.navigate_back().expect("reload ticket");
    assert_eq!(back_ticket.identifier, "A");
    assert_eq!(controller.current_path(), "/order/A");
    assert_eq!(controller.current_identifier(), "A");
    let outcome = run_lookup(controller.gateway(), &back_ticket.identifier).await;
    controller.apply_outcome(back_ticket.token, outcome);
    assert_eq!(controller.view_model().slot(Slot::OrderId), Some("A"));

    // The reload must not have eaten the forward entry.
    assert!(controller.can_navigate_forward());
    let forward_ticket = controller.navigate_forward().expect("reload ticket");
    assert_eq!(forward_ticket.identifier, "B");
    assert_eq!(controller.current_path(), "/order/B");
}

#[tokio::test]
async fn navigate_back_at_start_is_a_noop() {
    let (mut controller, gateway) = controller_with(MockGateway::new());
    assert!(controller.navigate_back().is_none());
    assert!(controller.navigate_forward().is_none());
    assert_eq!(controller.display_state(), DisplayState::Idle);
    assert!(gateway.calls().await.is_empty());
}

#[tokio::test]
async fn back_to_empty_path_does_not_reload() {
    let (mut controller, gateway) = controller_with(MockGateway::new().with_order("A", false));

    let ticket = controller.search("A").expect("ticket issued");
    let outcome = run_lookup(controller.gateway(), &ticket.identifier).await;
    controller.apply_outcome(ticket.token, outcome);

    // Back lands on the initial no-identifier path: cursor moves, no ticket.
    assert!(controller.navigate_back().is_none());
    assert_eq!(controller.current_path(), location::EMPTY_PATH);
    assert_eq!(controller.display_state(), DisplayState::Result);
    assert_eq!(gateway.calls().await.len(), 1);
}

// ===== Out-of-order completions =====

#[tokio::test]
async fn stale_completion_is_discarded() {
    let (mut controller, _gateway) = controller_with(
        MockGateway::new()
            .with_order("A", false)
            .with_order("B", false),
    );

    let first = controller.search("A").expect("ticket issued");
    let second = controller.search("B").expect("ticket issued");

    let first_outcome = run_lookup(controller.gateway(), &first.identifier).await;
    let second_outcome = run_lookup(controller.gateway(), &second.identifier).await;

    assert!(controller.apply_outcome(second.token, second_outcome));
    assert_eq!(controller.view_model().slot(Slot::OrderId), Some("B"));

    // The older completion arrives late and must not overwrite the display.
    assert!(!controller.apply_outcome(first.token, first_outcome));
    assert_eq!(controller.view_model().slot(Slot::OrderId), Some("B"));
    assert_eq!(controller.display_state(), DisplayState::Result);
}

#[tokio::test]
async fn stale_error_does_not_replace_newer_result() {
    let (mut controller, _gateway) = controller_with(
        MockGateway::new()
            .with_error(
                "A",
                GatewayError::Network {
                    detail: "reset".to_string(),
                },
            )
            .with_order("B", false),
    );

    let first = controller.search("A").expect("ticket issued");
    let second = controller.search("B").expect("ticket issued");

    let first_outcome = run_lookup(controller.gateway(), &first.identifier).await;
    let second_outcome = run_lookup(controller.gateway(), &second.identifier).await;

    assert!(controller.apply_outcome(second.token, second_outcome));
    assert!(!controller.apply_outcome(first.token, first_outcome));

    assert_eq!(controller.display_state(), DisplayState::Result);
    assert_eq!(controller.presenter().error_message(), None);
}
