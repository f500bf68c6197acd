//! Defines the endpoint for moving a goal's savings back to the balance.

use axum::{
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error,
    flash::{Flash, redirect_with_flash},
    goal::GoalState,
    html::format_currency,
    ledger::{GoalId, withdraw_from_goal},
    storage::JsonStore,
};

/// A route handler for withdrawing everything saved in a goal, redirects to the dashboard.
pub async fn withdraw_from_goal_endpoint(
    State(state): State<GoalState>,
    Path(goal_id): Path<GoalId>,
    jar: PrivateCookieJar,
) -> Response {
    let flash = match withdraw(&goal_id, &state.store) {
        Ok(withdrawn) => Flash::info(format!(
            "{} returned to available balance.",
            format_currency(withdrawn)
        )),
        Err(error) => {
            tracing::debug!("Could not withdraw from goal {goal_id}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

fn withdraw(goal_id: &GoalId, store: &JsonStore) -> Result<f64, Error> {
    let mut state = store.load();
    let withdrawn = withdraw_from_goal(&mut state, goal_id)?;
    store.save(&state)?;

    tracing::info!("Withdrew {withdrawn} from goal {goal_id}");

    Ok(withdrawn)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        goal::withdraw_endpoint::withdraw,
        ledger::{
            GoalId, LedgerState, TransactionType, add_goal, add_transaction, compute_totals,
            contribute_to_goal,
        },
        test_utils::must_create_test_store,
    };

    #[test]
    fn withdraw_returns_savings_and_empties_goal() {
        let (_dir, store) = must_create_test_store();
        let mut state = LedgerState::default();
        add_transaction(&mut state, TransactionType::Income, "Salary", 1000.0, "");
        let goal = add_goal(&mut state, "Trip", 500.0, "");
        contribute_to_goal(&mut state, &goal.id, 250.0, 1000.0).unwrap();
        store.save(&state).unwrap();

        let withdrawn = withdraw(&goal.id, &store);

        assert_eq!(withdrawn, Ok(250.0));
        let state = store.load();
        assert_eq!(state.goals[0].saved, 0.0);
        assert_eq!(compute_totals(&state).balance, 1000.0);
        assert_eq!(withdraw(&goal.id, &store), Err(Error::NothingToWithdraw));
    }

    #[test]
    fn missing_goal_is_rejected() {
        let (_dir, store) = must_create_test_store();

        let result = withdraw(&GoalId::new("goal_missing"), &store);

        assert_eq!(result, Err(Error::GoalNotFound));
    }
}
