//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/goals/delete/{goal_id}', use [format_endpoint].

use std::fmt::Display;

/// The dashboard, which shows the totals, transactions and goals.
pub const DASHBOARD_VIEW: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const POST_TRANSACTION: &str = "/transactions/add";
/// The route to delete a transaction.
pub const DELETE_TRANSACTION: &str = "/transactions/delete/{transaction_id}";
/// The route to create a savings goal.
pub const POST_GOAL: &str = "/goals/add";
/// The route to move money from the balance into a goal.
pub const CONTRIBUTE_TO_GOAL: &str = "/goals/contribute/{goal_id}";
/// The route to move all of a goal's savings back to the balance.
pub const WITHDRAW_FROM_GOAL: &str = "/goals/withdraw/{goal_id}";
/// The route to delete a goal.
pub const DELETE_GOAL: &str = "/goals/delete/{goal_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/goals/delete/{goal_id}', '{goal_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::POST_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::DELETE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::POST_GOAL);
        assert_endpoint_is_valid_uri(endpoints::CONTRIBUTE_TO_GOAL);
        assert_endpoint_is_valid_uri(endpoints::WITHDRAW_FROM_GOAL);
        assert_endpoint_is_valid_uri(endpoints::DELETE_GOAL);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/goals/delete/{goal_id}", "goal_0190f3c6");

        assert_eq!(formatted_path, "/goals/delete/goal_0190f3c6");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", "tx_1");

        assert_eq!(formatted_path, "/hello/tx_1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
