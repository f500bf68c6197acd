//! The ledger document and the operations that change it.
//!
//! Everything in this module works on a [LedgerState] value passed in by the
//! caller. Loading and saving the document is handled by
//! [JsonStore](crate::storage::JsonStore).

mod core;
mod goals;
mod totals;
mod transactions;

pub use core::{
    DEFAULT_CATEGORY, DEFAULT_GOAL_EMOJI, Goal, GoalId, LedgerState, Transaction, TransactionId,
    TransactionType, round_currency,
};
pub use goals::{Contribution, add_goal, contribute_to_goal, delete_goal, withdraw_from_goal};
pub use totals::{Totals, compute_totals};
pub use transactions::{add_transaction, delete_transaction, ensure_expense_allowed};
