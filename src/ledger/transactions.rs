//! Operations that add and remove transactions.

use time::OffsetDateTime;

use crate::{
    Error,
    ledger::{
        DEFAULT_CATEGORY, LedgerState, Transaction, TransactionId, TransactionType,
        compute_totals, round_currency,
    },
};

/// Append a new transaction to `state` and return a copy of it.
///
/// The description is trimmed, a blank category falls back to
/// [DEFAULT_CATEGORY] and the amount is rounded to cents.
///
/// The caller is expected to have checked that the description is not empty,
/// that the amount is positive and, for expenses, that the balance covers the
/// amount (see [ensure_expense_allowed]). None of these are checked here.
pub fn add_transaction(
    state: &mut LedgerState,
    kind: TransactionType,
    description: &str,
    amount: f64,
    category: &str,
) -> Transaction {
    let category = match category.trim() {
        "" => DEFAULT_CATEGORY,
        category => category,
    };

    let transaction = Transaction {
        id: TransactionId::generate(),
        kind,
        description: description.trim().to_owned(),
        amount: round_currency(amount),
        category: category.to_owned(),
        created_at: OffsetDateTime::now_utc(),
    };

    state.transactions.push(transaction.clone());

    transaction
}

/// Remove the transaction with `id` from `state`.
///
/// Returns `true` if a transaction was removed.
pub fn delete_transaction(state: &mut LedgerState, id: &TransactionId) -> bool {
    let count_before = state.transactions.len();
    state.transactions.retain(|transaction| &transaction.id != id);

    state.transactions.len() < count_before
}

/// Check that an expense of `amount` would not take the balance below zero.
///
/// # Errors
///
/// Returns [Error::InsufficientBalanceForExpense] if `amount`, rounded to
/// cents, is greater than the current balance.
pub fn ensure_expense_allowed(state: &LedgerState, amount: f64) -> Result<(), Error> {
    let balance = compute_totals(state).balance;

    if round_currency(amount) > balance {
        return Err(Error::InsufficientBalanceForExpense);
    }

    Ok(())
}
