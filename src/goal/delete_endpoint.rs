//! Defines the endpoint for deleting a goal.

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
    ledger::{GoalId, delete_goal},
    storage::JsonStore,
};

/// A route handler for deleting a goal, redirects to the dashboard.
///
/// Whatever was saved in the goal goes back to the available balance.
pub async fn delete_goal_endpoint(
    State(state): State<GoalState>,
    Path(goal_id): Path<GoalId>,
    jar: PrivateCookieJar,
) -> Response {
    let flash = match remove_goal(&goal_id, &state.store) {
        Ok(saved) if saved > 0.0 => Flash::info(format!(
            "Goal deleted ({} returned to balance).",
            format_currency(saved)
        )),
        Ok(_) => Flash::info("Goal deleted."),
        Err(error) => {
            tracing::debug!("Could not delete goal {goal_id}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

fn remove_goal(goal_id: &GoalId, store: &JsonStore) -> Result<f64, Error> {
    let mut state = store.load();
    let saved = delete_goal(&mut state, goal_id).ok_or(Error::GoalNotFound)?;
    store.save(&state)?;

    tracing::info!("Deleted goal {goal_id}, returning {saved} to the balance");

    Ok(saved)
}
