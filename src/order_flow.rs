//! Order intake and confirmation flow for the Trade tab.
//!
//! The flow owns one [`OrderDraft`] for one [`TradingPair`] and moves between
//! two states:
//!
//! ```text
//!   Editing --request_submit ok--> AwaitingConfirmation --confirm--> Editing (draft reset)
//!      ^  |                                   |
//!      |  +--request_submit err (stay)        +--cancel--> Editing (draft kept)
//! ```
//!
//! Validation is the pure function [`request_submit`]; it never touches the
//! draft. Execution is simulated and cannot fail, so [`OrderFlow::confirm`]
//! always yields a receipt when a confirmation is pending.

use rust_decimal::Decimal;

use crate::models::{DraftField, OrderDraft, OrderKind, OrderSide, TradingPair};
use crate::notify::{Notifier, Severity};

/// Reason a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Amount is empty or not a number.
    #[error("Please enter an amount.")]
    MissingAmount,
    /// Amount is a plain number too large for a `Decimal`.
    #[error("Amount is out of range.")]
    AmountOutOfRange,
    /// Amount parsed but is zero or negative.
    #[error("Amount must be positive.")]
    NonPositiveAmount,
    /// Limit order without a positive numeric price.
    #[error("Limit orders need a positive price.")]
    InvalidLimitPrice,
}

/// A draft that passed validation, with its numbers parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub side: OrderSide,
    pub kind: OrderKind,
    pub amount: Decimal,
    /// Present only for limit orders.
    pub price: Option<Decimal>,
    pub pair: TradingPair,
}

/// Read-only summary shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    title: String,
    description: String,
    order: ValidatedOrder,
}

impl PendingConfirmation {
    fn new(order: ValidatedOrder) -> Self {
        let title = format!("Confirm {} Order", order.side.label());
        let mut description = format!(
            "{} order for {} of {}",
            order.side.verb(),
            order.amount,
            order.pair.base()
        );
        if let Some(price) = order.price {
            description.push_str(&format!(" at {} {}", price, order.pair.quote()));
        }
        Self {
            title,
            description,
            order,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The order that confirming will execute.
    pub fn order(&self) -> &ValidatedOrder {
        &self.order
    }
}

/// Outcome of a simulated execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReceipt {
    /// Local sequence number, starting at 1 for each flow.
    pub sequence: u64,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub amount: Decimal,
    pub price: Option<Decimal>,
    pub base_asset: String,
    pub pair: TradingPair,
}

impl ExecutionReceipt {
    /// Text of the success toast, e.g. `Trade Executed! Bought 0.5 BTC.`
    pub fn notification(&self) -> String {
        format!(
            "Trade Executed! {} {} {}.",
            self.side.past_tense(),
            self.amount,
            self.base_asset
        )
    }
}

/// Validates `draft` for `pair` and builds the confirmation summary.
///
/// Checks run in order and the first failure wins:
/// 1. amount present and numeric
/// 2. amount within the `Decimal` range
/// 3. amount greater than zero
/// 4. for limit orders, price present, numeric and greater than zero
///
/// Market orders ignore whatever is in the price field.
pub fn request_submit(
    draft: &OrderDraft,
    pair: &TradingPair,
) -> Result<PendingConfirmation, ValidationError> {
    let amount = parse_decimal(&draft.amount).map_err(|e| match e {
        NumberError::Missing => ValidationError::MissingAmount,
        NumberError::OutOfRange => ValidationError::AmountOutOfRange,
    })?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    let price = match draft.kind {
        OrderKind::Market => None,
        OrderKind::Limit => match parse_decimal(&draft.price) {
            Ok(p) if p > Decimal::ZERO => Some(p),
            _ => return Err(ValidationError::InvalidLimitPrice),
        },
    };

    Ok(PendingConfirmation::new(ValidatedOrder {
        side: draft.side,
        kind: draft.kind,
        amount: amount.normalize(),
        price: price.map(|p| p.normalize()),
        pair: pair.clone(),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberError {
    /// Empty or not a number at all.
    Missing,
    /// Digits only, but more than a `Decimal` can hold.
    OutOfRange,
}

fn parse_decimal(text: &str) -> Result<Decimal, NumberError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NumberError::Missing);
    }
    text.parse().map_err(|_| {
        if is_plain_number(text) {
            NumberError::OutOfRange
        } else {
            NumberError::Missing
        }
    })
}

/// Optional sign, digits and at most one decimal point.
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1
}

/// Where the flow currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Editing,
    AwaitingConfirmation(PendingConfirmation),
}

/// Order entry state for one trading screen.
#[derive(Debug, Clone)]
pub struct OrderFlow {
    pair: TradingPair,
    draft: OrderDraft,
    state: FlowState,
    executed: u64,
}

impl OrderFlow {
    /// Starts editing an empty draft for `pair`.
    pub fn new(pair: TradingPair) -> Self {
        Self {
            pair,
            draft: OrderDraft::new(),
            state: FlowState::Editing,
            executed: 0,
        }
    }

    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// The summary awaiting confirm or cancel, if any.
    pub fn pending(&self) -> Option<&PendingConfirmation> {
        match &self.state {
            FlowState::AwaitingConfirmation(p) => Some(p),
            FlowState::Editing => None,
        }
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending().is_some()
    }

    /// Sets one draft field without validating it.
    ///
    /// Ignored while a confirmation is pending so the summary cannot drift
    /// from the draft it was built from. Returns whether the edit applied.
    pub fn update_field(&mut self, field: DraftField) -> bool {
        if self.is_awaiting_confirmation() {
            tracing::debug!(?field, "draft edit ignored while awaiting confirmation");
            return false;
        }
        tracing::debug!(?field, "draft edit");
        self.draft.set(field);
        true
    }

    /// Validates the current draft and, on success, opens the confirmation.
    ///
    /// On failure the state stays `Editing`. While a confirmation is already
    /// pending, the existing summary is returned unchanged.
    pub fn request_submit(&mut self) -> Result<PendingConfirmation, ValidationError> {
        if let Some(pending) = self.pending() {
            return Ok(pending.clone());
        }
        let pending = request_submit(&self.draft, &self.pair).inspect_err(|err| {
            tracing::warn!(pair = %self.pair, %err, "order rejected");
        })?;
        tracing::info!(
            pair = %self.pair,
            description = pending.description(),
            "order awaiting confirmation"
        );
        self.state = FlowState::AwaitingConfirmation(pending.clone());
        Ok(pending)
    }

    /// Buy/sell button: selects `side` and requests a submit in one step.
    ///
    /// Validation errors go to `notifier`. Returns whether the confirmation
    /// step opened.
    pub fn submit(&mut self, side: OrderSide, notifier: &mut dyn Notifier) -> bool {
        if self.is_awaiting_confirmation() {
            return false;
        }
        self.draft.set(DraftField::Side(side));
        match self.request_submit() {
            Ok(_) => true,
            Err(err) => {
                notifier.notify(&err.to_string(), Severity::Error);
                false
            }
        }
    }

    /// Gesture shortcut: selects `side` and tells the user to finish the form.
    pub fn prepare_side(&mut self, side: OrderSide, notifier: &mut dyn Notifier) {
        if self.update_field(DraftField::Side(side)) {
            notifier.notify(
                &format!("Gesture {}: Ready to confirm or fill order form.", side.label()),
                Severity::Info,
            );
        }
    }

    /// Executes the pending order (simulated) and resets the draft.
    ///
    /// Returns `None` only when nothing was pending.
    pub fn confirm(&mut self) -> Option<ExecutionReceipt> {
        let FlowState::AwaitingConfirmation(pending) = std::mem::take(&mut self.state) else {
            return None;
        };
        self.executed += 1;
        let order = pending.order;
        let receipt = ExecutionReceipt {
            sequence: self.executed,
            side: order.side,
            kind: order.kind,
            amount: order.amount,
            price: order.price,
            base_asset: order.pair.base().to_string(),
            pair: order.pair,
        };
        self.draft = OrderDraft::new();
        tracing::info!(
            sequence = receipt.sequence,
            side = %receipt.side,
            amount = %receipt.amount,
            base = %receipt.base_asset,
            "simulated order executed"
        );
        Some(receipt)
    }

    /// [`confirm`](Self::confirm) plus the success toast.
    pub fn confirm_and_notify(&mut self, notifier: &mut dyn Notifier) -> Option<ExecutionReceipt> {
        let receipt = self.confirm()?;
        notifier.notify(&receipt.notification(), Severity::Success);
        Some(receipt)
    }

    /// Discards the pending confirmation, keeping the draft as it was.
    ///
    /// Idempotent. Returns whether anything was discarded.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            FlowState::AwaitingConfirmation(_) => {
                tracing::info!(pair = %self.pair, "order confirmation cancelled");
                true
            }
            FlowState::Editing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    fn btc_usdt() -> TradingPair {
        "BTC_USDT".parse().unwrap()
    }

    fn draft(amount: &str, kind: OrderKind, price: &str, side: OrderSide) -> OrderDraft {
        OrderDraft {
            amount: amount.to_string(),
            price: price.to_string(),
            kind,
            side,
        }
    }

    #[test]
    fn empty_amount_is_missing() {
        let d = draft("", OrderKind::Market, "", OrderSide::Buy);
        assert_eq!(
            request_submit(&d, &btc_usdt()),
            Err(ValidationError::MissingAmount)
        );
    }

    #[test]
    fn oversized_amount_is_out_of_range() {
        let d = draft(&"9".repeat(30), OrderKind::Market, "", OrderSide::Buy);
        assert_eq!(
            request_submit(&d, &btc_usdt()),
            Err(ValidationError::AmountOutOfRange)
        );
        assert_eq!(parse_decimal("ten"), Err(NumberError::Missing));
        assert!(is_plain_number("+12.5"));
        assert!(!is_plain_number("."));
    }

    #[test]
    fn non_numeric_amount_is_missing() {
        let d = draft("1.2.3", OrderKind::Limit, "", OrderSide::Buy);
        assert_eq!(
            request_submit(&d, &btc_usdt()),
            Err(ValidationError::MissingAmount)
        );
    }

    #[test]
    fn amount_check_precedes_price_check() {
        let d = draft("0", OrderKind::Limit, "", OrderSide::Sell);
        assert_eq!(
            request_submit(&d, &btc_usdt()),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn market_order_ignores_garbage_price() {
        let d = draft("1", OrderKind::Market, "not a price", OrderSide::Sell);
        let pending = request_submit(&d, &btc_usdt()).unwrap();
        assert_eq!(pending.description(), "sell order for 1 of BTC");
        assert_eq!(pending.order().price, None);
    }

    #[test]
    fn limit_price_must_be_positive() {
        for price in ["", "abc", "0", "-1"] {
            let d = draft("1", OrderKind::Limit, price, OrderSide::Buy);
            assert_eq!(
                request_submit(&d, &btc_usdt()),
                Err(ValidationError::InvalidLimitPrice),
                "price {price:?}"
            );
        }
    }

    #[test]
    fn title_follows_side() {
        let d = draft("1", OrderKind::Market, "", OrderSide::Sell);
        assert_eq!(
            request_submit(&d, &btc_usdt()).unwrap().title(),
            "Confirm Sell Order"
        );
    }

    #[test]
    fn trailing_zeros_are_trimmed_in_description() {
        let d = draft(" 2.500 ", OrderKind::Limit, "60500.00", OrderSide::Buy);
        assert_eq!(
            request_submit(&d, &btc_usdt()).unwrap().description(),
            "buy order for 2.5 of BTC at 60500 USDT"
        );
    }

    #[test]
    fn edits_are_ignored_while_awaiting() {
        let mut flow = OrderFlow::new(btc_usdt());
        flow.update_field(DraftField::Amount("1".to_string()));
        flow.request_submit().unwrap();
        assert!(!flow.update_field(DraftField::Amount("5".to_string())));
        assert_eq!(flow.draft().amount, "1");
    }

    #[test]
    fn submit_reports_error_and_stays_editing() {
        let mut flow = OrderFlow::new(btc_usdt());
        let mut notes = RecordingNotifier::new();
        assert!(!flow.submit(OrderSide::Sell, &mut notes));
        assert_eq!(flow.state(), &FlowState::Editing);
        assert_eq!(flow.draft().side, OrderSide::Sell);
        assert_eq!(
            notes.last(),
            Some(("Please enter an amount.", Severity::Error))
        );
    }

    #[test]
    fn confirm_notifies_and_numbers_receipts() {
        let mut flow = OrderFlow::new(btc_usdt());
        let mut notes = RecordingNotifier::new();

        flow.update_field(DraftField::Amount("0.5".to_string()));
        assert!(flow.submit(OrderSide::Buy, &mut notes));
        let first = flow.confirm_and_notify(&mut notes).unwrap();
        assert_eq!(first.sequence, 1);
        assert_eq!(
            notes.last(),
            Some(("Trade Executed! Bought 0.5 BTC.", Severity::Success))
        );

        flow.update_field(DraftField::Amount("3".to_string()));
        assert!(flow.submit(OrderSide::Sell, &mut notes));
        let second = flow.confirm_and_notify(&mut notes).unwrap();
        assert_eq!(second.sequence, 2);
        assert_eq!(second.notification(), "Trade Executed! Sold 3 BTC.");
    }

    #[test]
    fn confirm_without_pending_is_none() {
        let mut flow = OrderFlow::new(btc_usdt());
        assert!(flow.confirm().is_none());
    }

    #[test]
    fn request_submit_while_awaiting_returns_same_summary() {
        let mut flow = OrderFlow::new(btc_usdt());
        flow.update_field(DraftField::Amount("1".to_string()));
        let first = flow.request_submit().unwrap();
        let again = flow.request_submit().unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn gesture_sets_side_with_info_toast() {
        let mut flow = OrderFlow::new(btc_usdt());
        let mut notes = RecordingNotifier::new();
        flow.prepare_side(OrderSide::Sell, &mut notes);
        assert_eq!(flow.draft().side, OrderSide::Sell);
        assert_eq!(
            notes.last(),
            Some((
                "Gesture Sell: Ready to confirm or fill order form.",
                Severity::Info
            ))
        );
    }
}
