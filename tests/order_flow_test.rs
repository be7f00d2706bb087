//! End-to-end checks of order intake: validate, confirm or cancel, reset.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use mockex::models::{DraftField, OrderKind, OrderSide, TradingPair};
use mockex::notify::{RecordingNotifier, Severity};
use mockex::order_flow::{FlowState, OrderFlow, ValidationError, request_submit};

fn btc_usdt() -> TradingPair {
    "BTC_USDT".parse().expect("valid pair")
}

fn flow_with(amount: &str, kind: OrderKind, price: &str, side: OrderSide) -> OrderFlow {
    let mut flow = OrderFlow::new(btc_usdt());
    flow.update_field(DraftField::Amount(amount.to_string()));
    flow.update_field(DraftField::Kind(kind));
    flow.update_field(DraftField::Price(price.to_string()));
    flow.update_field(DraftField::Side(side));
    flow
}

#[test]
fn test_market_buy_opens_confirmation() {
    let mut flow = flow_with("0.5", OrderKind::Market, "", OrderSide::Buy);

    let pending = flow.request_submit().expect("valid market order");

    assert_eq!(pending.title(), "Confirm Buy Order");
    assert_eq!(pending.description(), "buy order for 0.5 of BTC");
    assert_eq!(pending.order().amount, dec!(0.5));
    assert_eq!(pending.order().price, None);
    assert!(flow.is_awaiting_confirmation());
}

#[test]
fn test_limit_sell_without_price_is_rejected() {
    let mut flow = flow_with("1", OrderKind::Limit, "", OrderSide::Sell);

    assert_eq!(
        flow.request_submit(),
        Err(ValidationError::InvalidLimitPrice)
    );
    assert_eq!(flow.state(), &FlowState::Editing);
}

#[test]
fn test_negative_market_amount_is_rejected() {
    let mut flow = flow_with("-3", OrderKind::Market, "", OrderSide::Buy);

    assert_eq!(
        flow.request_submit(),
        Err(ValidationError::NonPositiveAmount)
    );
    assert!(!flow.is_awaiting_confirmation());
}

#[test]
fn test_amount_beyond_decimal_range_is_reported_as_such() {
    let mut notifier = RecordingNotifier::new();
    let mut flow = OrderFlow::new(btc_usdt());
    flow.update_field(DraftField::Amount("9".repeat(30)));

    assert!(!flow.submit(OrderSide::Buy, &mut notifier));
    assert_eq!(
        notifier.last(),
        Some(("Amount is out of range.", Severity::Error))
    );
    assert_eq!(flow.draft().amount, "9".repeat(30));

    flow.update_field(DraftField::Amount("12abc".to_string()));
    assert_eq!(flow.request_submit(), Err(ValidationError::MissingAmount));
}

#[test]
fn test_limit_buy_confirm_resets_draft() {
    let mut flow = flow_with("2", OrderKind::Limit, "60500", OrderSide::Buy);

    let pending = flow.request_submit().expect("valid limit order");
    assert_eq!(pending.description(), "buy order for 2 of BTC at 60500 USDT");

    let receipt = flow.confirm().expect("pending order executes");
    assert_eq!(receipt.sequence, 1);
    assert_eq!(receipt.price, Some(dec!(60500)));
    assert_eq!(receipt.notification(), "Trade Executed! Bought 2 BTC.");

    assert!(flow.draft().amount.is_empty());
    assert!(flow.draft().price.is_empty());
    assert_eq!(flow.draft().kind, OrderKind::Market);
    assert_eq!(flow.state(), &FlowState::Editing);
}

#[test]
fn test_non_positive_amounts_fail_for_every_kind_and_side() {
    let pair = btc_usdt();
    for amount in ["0", "-0.0001", "-3", "0.000", "-60500"] {
        for kind in [OrderKind::Market, OrderKind::Limit] {
            for side in [OrderSide::Buy, OrderSide::Sell] {
                let mut flow = OrderFlow::new(pair.clone());
                flow.update_field(DraftField::Amount(amount.to_string()));
                flow.update_field(DraftField::Kind(kind));
                flow.update_field(DraftField::Price("100".to_string()));
                flow.update_field(DraftField::Side(side));
                assert_eq!(
                    request_submit(flow.draft(), &pair),
                    Err(ValidationError::NonPositiveAmount),
                    "amount {amount} {kind:?} {side:?}"
                );
            }
        }
    }
}

#[test]
fn test_limit_price_must_be_positive_number() {
    for price in ["", "   ", "0", "-1", "abc"] {
        let mut flow = flow_with("1", OrderKind::Limit, price, OrderSide::Buy);
        assert_eq!(
            flow.request_submit(),
            Err(ValidationError::InvalidLimitPrice),
            "price {price:?}"
        );
    }
}

#[test]
fn test_validation_never_mutates_draft() {
    let pair = btc_usdt();
    for (amount, kind, price) in [
        ("0.5", OrderKind::Market, "123"),
        ("1", OrderKind::Limit, ""),
        ("", OrderKind::Limit, "60500"),
    ] {
        let flow = flow_with(amount, kind, price, OrderSide::Sell);
        let before = flow.draft().clone();
        let _ = request_submit(flow.draft(), &pair);
        assert_eq!(flow.draft(), &before);
    }
}

#[test]
fn test_cancel_keeps_draft_and_allows_resubmit() {
    let mut flow = flow_with("0.25", OrderKind::Limit, "59000", OrderSide::Sell);
    let before = flow.draft().clone();

    flow.request_submit().expect("valid order");
    assert!(flow.cancel());
    assert_eq!(flow.draft(), &before);
    assert!(!flow.cancel());

    let again = flow.request_submit().expect("still valid");
    assert_eq!(again.description(), "sell order for 0.25 of BTC at 59000 USDT");
}

#[test]
fn test_submit_reports_errors_and_successes_through_notifier() {
    let mut notifier = RecordingNotifier::new();
    let mut flow = OrderFlow::new(btc_usdt());

    assert!(!flow.submit(OrderSide::Buy, &mut notifier));
    assert_eq!(
        notifier.last(),
        Some(("Please enter an amount.", Severity::Error))
    );

    flow.update_field(DraftField::Amount("3".to_string()));
    assert!(flow.submit(OrderSide::Sell, &mut notifier));
    assert_eq!(
        flow.pending().map(|p| p.title()),
        Some("Confirm Sell Order")
    );

    let receipt = flow
        .confirm_and_notify(&mut notifier)
        .expect("pending order executes");
    assert_eq!(receipt.amount, dec!(3));
    assert_eq!(
        notifier.last(),
        Some(("Trade Executed! Sold 3 BTC.", Severity::Success))
    );
}

#[test]
fn test_confirm_without_pending_does_nothing() {
    let mut flow = flow_with("1", OrderKind::Market, "", OrderSide::Buy);
    let before = flow.draft().clone();

    assert_eq!(flow.confirm(), None);
    assert_eq!(flow.draft(), &before);
}

#[test]
fn test_sequence_numbers_increase_per_execution() {
    let mut flow = OrderFlow::new(btc_usdt());
    let mut sequences = Vec::new();
    for amount in ["1", "2", "3"] {
        flow.update_field(DraftField::Amount(amount.to_string()));
        flow.request_submit().expect("valid order");
        sequences.push(flow.confirm().expect("executes").sequence);
    }
    assert_eq!(sequences, vec![1, 2, 3]);
}

#[test]
fn test_amount_text_is_trimmed_and_normalized() {
    let mut flow = flow_with("  1.500 ", OrderKind::Market, "", OrderSide::Buy);
    let pending = flow.request_submit().expect("valid order");
    assert_eq!(pending.order().amount, dec!(1.5));
    assert_eq!(pending.description(), "buy order for 1.5 of BTC");
    assert!(pending.order().amount > Decimal::ZERO);
}
