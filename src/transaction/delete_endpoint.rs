//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    AppState, Error,
    flash::{Flash, redirect_with_flash},
    ledger::{TransactionId, delete_transaction},
    storage::JsonStore,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store holding the ledger.
    store: JsonStore,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the dashboard.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    jar: PrivateCookieJar,
) -> Response {
    let flash = match remove_transaction(&transaction_id, &state.store) {
        Ok(()) => Flash::info("Transaction deleted."),
        Err(error) => {
            tracing::debug!("Could not delete transaction {transaction_id}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

fn remove_transaction(id: &TransactionId, store: &JsonStore) -> Result<(), Error> {
    let mut state = store.load();

    if !delete_transaction(&mut state, id) {
        return Err(Error::TransactionNotFound);
    }

    store.save(&state)?;
    tracing::info!("Deleted transaction {id}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};

    use crate::{
        Error,
        ledger::{LedgerState, TransactionId, TransactionType, add_transaction},
        test_utils::must_create_test_store,
        transaction::delete_endpoint::{
            DeleteTransactionState, delete_transaction_endpoint, remove_transaction,
        },
    };

    #[test]
    fn deletes_transaction() {
        let (_dir, store) = must_create_test_store();
        let mut state = LedgerState::default();
        let transaction = add_transaction(&mut state, TransactionType::Income, "Salary", 10.0, "");
        store.save(&state).unwrap();

        remove_transaction(&transaction.id, &store).unwrap();

        assert!(store.load().transactions.is_empty());
    }

    #[test]
    fn missing_transaction_is_reported() {
        let (_dir, store) = must_create_test_store();

        let result = remove_transaction(&TransactionId::new("tx_missing"), &store);

        assert_eq!(result, Err(Error::TransactionNotFound));
    }

    #[tokio::test]
    async fn endpoint_redirects_to_dashboard() {
        let (_dir, store) = must_create_test_store();
        let mut state = LedgerState::default();
        let transaction = add_transaction(&mut state, TransactionType::Income, "Salary", 10.0, "");
        store.save(&state).unwrap();

        let response = delete_transaction_endpoint(
            State(DeleteTransactionState {
                store: store.clone(),
            }),
            Path(transaction.id),
            PrivateCookieJar::new(Key::generate()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(store.load().transactions.is_empty());
    }
}
