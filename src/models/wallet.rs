//! Wallet models: holdings, transaction history, and the withdraw check.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of one asset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Holding {
    pub name: String,
    pub symbol: String,
    pub balance: Decimal,
    /// Value of the balance in USD.
    pub fiat_value: Decimal,
}

/// Kind of a wallet history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Trade,
    #[serde(rename = "Earn Reward")]
    EarnReward,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Trade => "Trade",
            TransactionKind::EarnReward => "Earn Reward",
        }
    }
}

/// Settlement status of a wallet history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        })
    }
}

/// One row of the static transaction history.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Asset or pair label, e.g. `BTC` or `SOL/USDT`.
    pub asset: String,
    /// Signed amount as displayed, e.g. `+0.1` or `+10 SOL`.
    pub amount: String,
    pub date: String,
    pub status: TransactionStatus,
}

/// Sum of all holdings' USD values.
pub fn total_fiat_value(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(|h| h.fiat_value).sum()
}

/// Each holding's share of the total USD value, in percent.
///
/// Returns zero shares when the total is zero.
pub fn allocation(holdings: &[Holding]) -> Vec<(&str, Decimal)> {
    let total = total_fiat_value(holdings);
    holdings
        .iter()
        .map(|h| {
            let pct = if total.is_zero() {
                Decimal::ZERO
            } else {
                (h.fiat_value / total * Decimal::ONE_HUNDRED).round_dp(2)
            };
            (h.symbol.as_str(), pct)
        })
        .collect()
}

/// Placeholder deposit address shown in the deposit dialog.
pub fn deposit_address(symbol: &str) -> String {
    format!("YOUR_{}_DEPOSIT_ADDRESS", symbol.to_ascii_uppercase())
}

/// Reason a withdrawal request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawError {
    #[error("Please enter an amount.")]
    MissingAmount,
    #[error("Amount must be positive.")]
    NonPositiveAmount,
    #[error("Insufficient balance: {available} {symbol} available.")]
    InsufficientBalance { available: Decimal, symbol: String },
    #[error("Please enter a withdrawal address.")]
    MissingAddress,
}

/// Validates a withdrawal of `amount_text` of `holding` to `address`.
///
/// Checks run in order: amount present and numeric, amount positive, amount
/// within balance, address present. Balances are never changed; the caller
/// only reports the outcome.
pub fn validate_withdrawal(
    holding: &Holding,
    amount_text: &str,
    address: &str,
) -> Result<Decimal, WithdrawError> {
    let amount: Decimal = amount_text
        .trim()
        .parse()
        .map_err(|_| WithdrawError::MissingAmount)?;
    if amount <= Decimal::ZERO {
        return Err(WithdrawError::NonPositiveAmount);
    }
    if amount > holding.balance {
        return Err(WithdrawError::InsufficientBalance {
            available: holding.balance,
            symbol: holding.symbol.clone(),
        });
    }
    if address.trim().is_empty() {
        return Err(WithdrawError::MissingAddress);
    }
    Ok(amount)
}
