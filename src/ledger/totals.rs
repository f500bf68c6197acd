//! Derived totals for the dashboard and for balance checks.

use crate::ledger::{LedgerState, TransactionType, round_currency};

/// Totals derived from a [LedgerState].
///
/// Totals are never stored, they are recomputed from scratch on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expense: f64,
    /// The sum of the amounts saved across all goals.
    pub goals_saved: f64,
    /// Income minus expenses minus the amount saved in goals.
    pub balance: f64,
    /// The number of income transactions.
    pub income_count: usize,
    /// The number of expense transactions.
    pub expense_count: usize,
    /// The number of goals.
    pub goals_count: usize,
}

/// Compute the totals for `state`.
///
/// Monetary totals are rounded to cents. The balance is derived from the
/// unrounded sums and rounded once at the end.
pub fn compute_totals(state: &LedgerState) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    let mut income_count = 0;
    let mut expense_count = 0;

    for transaction in &state.transactions {
        match transaction.kind {
            TransactionType::Income => {
                income += transaction.amount;
                income_count += 1;
            }
            TransactionType::Expense => {
                expense += transaction.amount;
                expense_count += 1;
            }
        }
    }

    let goals_saved: f64 = state.goals.iter().map(|goal| goal.saved).sum();
    let balance = income - expense - goals_saved;

    Totals {
        income: round_currency(income),
        expense: round_currency(expense),
        goals_saved: round_currency(goals_saved),
        balance: round_currency(balance),
        income_count,
        expense_count,
        goals_count: state.goals.len(),
    }
}
