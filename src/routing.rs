//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    goal::{
        contribute_to_goal_endpoint, create_goal_endpoint, delete_goal_endpoint,
        withdraw_from_goal_endpoint,
    },
    transaction::{create_transaction_endpoint, delete_transaction_endpoint},
};

/// Return a router with all the app's routes.
///
/// Files under `static_dir` are served from [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::POST_TRANSACTION, post(create_transaction_endpoint))
        .route(
            endpoints::DELETE_TRANSACTION,
            post(delete_transaction_endpoint),
        )
        .route(endpoints::POST_GOAL, post(create_goal_endpoint))
        .route(
            endpoints::CONTRIBUTE_TO_GOAL,
            post(contribute_to_goal_endpoint),
        )
        .route(
            endpoints::WITHDRAW_FROM_GOAL,
            post(withdraw_from_goal_endpoint),
        )
        .route(endpoints::DELETE_GOAL, post(delete_goal_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(get_404_not_found)
        .with_state(state)
}
