//! Route handlers for savings goals.
//!
//! Every handler loads the ledger, applies one goal operation, saves the
//! ledger if the operation succeeded and redirects back to the dashboard with
//! a status message.

mod contribute_endpoint;
mod create_endpoint;
mod delete_endpoint;
mod withdraw_endpoint;

use axum::extract::FromRef;

use crate::{AppState, storage::JsonStore};

pub use contribute_endpoint::contribute_to_goal_endpoint;
pub use create_endpoint::create_goal_endpoint;
pub use delete_endpoint::delete_goal_endpoint;
pub use withdraw_endpoint::withdraw_from_goal_endpoint;

/// The state needed by the goal endpoints.
#[derive(Debug, Clone)]
pub struct GoalState {
    /// The store holding the ledger.
    pub store: JsonStore,
}

impl FromRef<AppState> for GoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}
