//! Defines the endpoint for creating a new savings goal.

use axum::{Form, extract::State, response::Response};
use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    flash::{Flash, redirect_with_flash},
    goal::GoalState,
    ledger::{Goal, add_goal, round_currency},
    storage::JsonStore,
    validation::{parse_amount, require_positive, require_text},
};

/// The form data for creating a goal.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GoalForm {
    /// The name of the goal.
    #[serde(default)]
    pub name: String,
    /// The amount to save in dollars.
    #[serde(default)]
    pub target: String,
    /// An emoji shown next to the name, "🎯" if left blank.
    #[serde(default)]
    pub emoji: String,
}

/// A route handler for creating a new goal, redirects to the dashboard.
pub async fn create_goal_endpoint(
    State(state): State<GoalState>,
    jar: PrivateCookieJar,
    Form(form): Form<GoalForm>,
) -> Response {
    let flash = match create_goal(&form, &state.store) {
        Ok(goal) => Flash::success(format!("Goal '{}' created.", goal.name)),
        Err(error) => {
            tracing::debug!("Rejected goal {form:?}: {error}");
            Flash::from_error(&error)
        }
    };

    redirect_with_flash(jar, flash)
}

/// Validate `form`, add the goal to the ledger and save it.
///
/// # Errors
///
/// The ledger is not changed if an error is returned. Returns:
/// - [Error::InvalidAmount] if the target is not a number,
/// - [Error::EmptyGoalName] if the name is blank,
/// - [Error::NonPositiveTarget] if the target is zero or negative once rounded to cents,
/// - [Error::StorageWrite] if the ledger could not be saved.
pub fn create_goal(form: &GoalForm, store: &JsonStore) -> Result<Goal, Error> {
    let target = parse_amount(&form.target)?;
    let name = require_text(&form.name, Error::EmptyGoalName)?;
    let target = require_positive(round_currency(target), Error::NonPositiveTarget)?;

    let mut state = store.load();
    let goal = add_goal(&mut state, name, target, &form.emoji);
    store.save(&state)?;

    tracing::info!("Added goal {}", goal.id);

    Ok(goal)
}
