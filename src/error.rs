//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::response::{IntoResponse, Response};

use crate::{
    alert::Severity,
    error_pages::{InternalServerError, NotFoundError},
};

/// The errors that may occur in the application.
///
/// The `Display` text of each variant is written for the user, since it is
/// shown in the alert on the dashboard.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount in a form could not be parsed as a number.
    #[error("Invalid amount. Please enter a number.")]
    InvalidAmount,

    /// The transaction type was neither "income" nor "expense".
    #[error("Invalid transaction type. Choose income or expense.")]
    InvalidTransactionType,

    /// A transaction was submitted with an empty description.
    #[error("Please enter a description.")]
    EmptyDescription,

    /// A goal was submitted with an empty name.
    #[error("Please enter a name for the goal.")]
    EmptyGoalName,

    /// A transaction or contribution amount was zero or negative.
    #[error("The amount must be greater than 0.")]
    NonPositiveAmount,

    /// A goal target was zero or negative.
    #[error("The target amount must be greater than 0.")]
    NonPositiveTarget,

    /// The balance does not cover the expense.
    #[error("Insufficient balance for this expense.")]
    InsufficientBalanceForExpense,

    /// The balance does not cover the contribution to a goal.
    #[error("Insufficient balance for this contribution.")]
    InsufficientBalanceForContribution,

    /// No transaction has the requested ID.
    #[error("Transaction not found.")]
    TransactionNotFound,

    /// No goal has the requested ID.
    #[error("Goal not found.")]
    GoalNotFound,

    /// Tried to withdraw from a goal that has nothing saved.
    #[error("The goal has no funds to withdraw.")]
    NothingToWithdraw,

    /// The ledger could not be written to disk.
    ///
    /// The string holds the underlying I/O error and should be logged.
    #[error("Could not save your changes: {0}")]
    StorageWrite(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The requested page was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl Error {
    /// How the error should be presented to the user.
    ///
    /// Mistakes in form input are warnings, everything else is an error.
    pub fn severity(&self) -> Severity {
        match self {
            Error::EmptyDescription
            | Error::EmptyGoalName
            | Error::NonPositiveAmount
            | Error::NonPositiveTarget
            | Error::NothingToWithdraw => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::StorageWrite(_) => InternalServerError {
                description: "Could not save the ledger",
                fix: "Check that the data file is writable and try again.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
