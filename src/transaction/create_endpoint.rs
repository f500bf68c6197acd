//! Defines the endpoint for creating a new transaction.

use axum::{
    Form,
    extract::{FromRef, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    flash::{Flash, redirect_with_flash},
    html::format_currency,
    ledger::{
        Transaction, TransactionType, add_transaction, ensure_expense_allowed, round_currency,
    },
    storage::JsonStore,
    validation::{parse_amount, parse_transaction_type, require_positive, require_text},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store holding the ledger.
    pub store: JsonStore,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// Every field is kept as raw text so that bad input can be reported to the
/// user rather than rejected by the extractor.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: String,
    /// The category, "General" if left blank.
    #[serde(default)]
    pub category: String,
}

/// A route handler for creating a new transaction, redirects to the dashboard.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    let flash = match create_transaction(&form, &state.store) {
        Ok(transaction) => Flash::success(format!(
            "{} of {} added.",
            transaction.kind,
            format_currency(transaction.amount)
        )),
        Err(error) => {
            tracing::debug!("Rejected transaction {form:?}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

/// Validate `form`, add the transaction to the ledger and save it.
///
/// # Errors
///
/// The ledger is not changed if an error is returned. Returns:
/// - [Error::InvalidTransactionType] if the type is not income or expense,
/// - [Error::InvalidAmount] if the amount is not a number,
/// - [Error::EmptyDescription] if the description is blank,
/// - [Error::NonPositiveAmount] if the amount is zero or negative once rounded to cents,
/// - [Error::InsufficientBalanceForExpense] if an expense is more than the balance,
/// - [Error::StorageWrite] if the ledger could not be saved.
pub fn create_transaction(form: &TransactionForm, store: &JsonStore) -> Result<Transaction, Error> {
    let kind = parse_transaction_type(&form.kind)?;
    let amount = parse_amount(&form.amount)?;
    let description = require_text(&form.description, Error::EmptyDescription)?;
    let amount = require_positive(round_currency(amount), Error::NonPositiveAmount)?;

    let mut state = store.load();

    if kind == TransactionType::Expense {
        ensure_expense_allowed(&state, amount)?;
    }

    let transaction = add_transaction(&mut state, kind, description, amount, &form.category);
    store.save(&state)?;

    tracing::info!("Added {} {}", transaction.kind, transaction.id);

    Ok(transaction)
}
