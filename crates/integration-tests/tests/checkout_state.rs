//! Checkout state service against a mocked backend.

use canopy_client::CheckoutState;
use canopy_core::{Address, CheckoutForm, CheckoutService, CheckoutStatus, SessionId};
use canopy_integration_tests::{MockApi, MockResponse, fixtures, storefront_api};

fn checkout_state(mock: &MockApi) -> CheckoutState {
    let (api, _signals) = storefront_api(mock);
    CheckoutState::new(api, SessionId::new("sess_1"))
}

fn valid_form() -> CheckoutForm {
    CheckoutForm {
        email: "shopper@example.com".to_owned(),
        address: Address {
            first_name: "Ada".to_owned(),
            last_name: "Linden".to_owned(),
            line1: "1 Canal St".to_owned(),
            line2: None,
            city: "Portland".to_owned(),
            region: Some("OR".to_owned()),
            postal_code: "97201".to_owned(),
            country: "US".to_owned(),
        },
        note: None,
    }
}

#[tokio::test]
async fn test_invalid_form_never_reaches_the_network() {
    let mock = MockApi::start().await;
    let state = checkout_state(&mock);

    let mut form = valid_form();
    form.email = "not-an-email".to_owned();

    let err = state.submit(&form).await.expect_err("expected rejection");

    assert!(err.is_validation());
    assert_eq!(state.status(), CheckoutStatus::Failed);
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn test_successful_submission_completes_with_the_order() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::order())).await;

    let state = checkout_state(&mock);
    state.submit(&valid_form()).await.expect("submit failed");

    assert_eq!(state.status(), CheckoutStatus::Completed);
    let order = state.order().data.expect("no order landed");
    assert_eq!(order.number, "CN-1042");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/stores/store_1/carts/sess_1/checkout");

    let body = requests[0].body_json();
    assert_eq!(body["email"], "shopper@example.com");
    assert_eq!(body["address"]["firstName"], "Ada");
    assert_eq!(body["address"]["postalCode"], "97201");
    // Unset optionals are omitted, not sent as null.
    assert!(body.get("note").is_none());
}

#[tokio::test]
async fn test_backend_rejection_reads_as_failed() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::error(
        422,
        "checkout_failed",
        "payment provider unavailable",
    ))
    .await;

    let state = checkout_state(&mock);
    let err = state
        .submit(&valid_form())
        .await
        .expect_err("expected failure");

    assert_eq!(
        err.message,
        "We couldn't complete your checkout. Please try again."
    );
    assert_eq!(state.status(), CheckoutStatus::Failed);
    assert!(state.order().data.is_none());
}

#[tokio::test]
async fn test_reset_returns_the_flow_to_idle() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::error(500, "internal", "boom")).await;

    let state = checkout_state(&mock);
    let _ = state.submit(&valid_form()).await;
    assert_eq!(state.status(), CheckoutStatus::Failed);

    state.reset();

    assert_eq!(state.status(), CheckoutStatus::Idle);
    assert!(state.order().error.is_none());
}
