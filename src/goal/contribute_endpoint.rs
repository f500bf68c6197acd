//! Defines the endpoint for moving money from the balance into a goal.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    flash::{Flash, redirect_with_flash},
    goal::GoalState,
    html::format_currency,
    ledger::{Contribution, GoalId, compute_totals, contribute_to_goal},
    storage::JsonStore,
    validation::parse_amount,
};

/// The form data for contributing to a goal.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContributionForm {
    /// The amount to move into the goal in dollars.
    #[serde(default)]
    pub amount: String,
}

/// A route handler for contributing to a goal, redirects to the dashboard.
///
/// The status message reports the amount that was actually added, which is
/// less than the amount entered when the goal needed less.
pub async fn contribute_to_goal_endpoint(
    State(state): State<GoalState>,
    Path(goal_id): Path<GoalId>,
    jar: PrivateCookieJar,
    Form(form): Form<ContributionForm>,
) -> Response {
    let flash = match contribute(&goal_id, &form, &state.store) {
        Ok(contribution) => Flash::success(format!(
            "Contribution of {} recorded.",
            format_currency(contribution.applied)
        )),
        Err(error) => {
            tracing::debug!("Rejected contribution to goal {goal_id}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

fn contribute(
    goal_id: &GoalId,
    form: &ContributionForm,
    store: &JsonStore,
) -> Result<Contribution, Error> {
    let amount = parse_amount(&form.amount)?;

    let mut state = store.load();
    let available_balance = compute_totals(&state).balance;
    let contribution = contribute_to_goal(&mut state, goal_id, amount, available_balance)?;
    store.save(&state)?;

    tracing::info!(
        "Contributed {} of {} to goal {goal_id}",
        contribution.applied,
        contribution.requested
    );

    Ok(contribution)
}
