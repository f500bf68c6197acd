//! Validation of raw form input before it reaches the ledger.
//!
//! Amounts are taken from forms as text so that a non-numeric amount can be
//! reported to the user instead of being rejected by the form extractor.

use crate::{Error, ledger::TransactionType};

/// Parse a form field as an amount in dollars.
///
/// Surrounding whitespace is ignored. The sign is not checked here, use
/// [require_positive] for that.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] if `raw` is not a finite number.
pub fn parse_amount(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(Error::InvalidAmount)
}

/// Parse the transaction type radio button.
///
/// A missing value is treated as income, which is the default choice on the
/// form.
///
/// # Errors
///
/// Returns [Error::InvalidTransactionType] for anything other than "income"
/// or "expense".
pub fn parse_transaction_type(raw: &str) -> Result<TransactionType, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "income" => Ok(TransactionType::Income),
        "expense" => Ok(TransactionType::Expense),
        _ => Err(Error::InvalidTransactionType),
    }
}

/// Check that `amount` is greater than zero, returning `error` if it is not.
pub fn require_positive(amount: f64, error: Error) -> Result<f64, Error> {
    if amount > 0.0 { Ok(amount) } else { Err(error) }
}

/// Trim `raw` and check that something is left, returning `error` if not.
pub fn require_text(raw: &str, error: Error) -> Result<&str, Error> {
    match raw.trim() {
        "" => Err(error),
        text => Ok(text),
    }
}
