//! Route handlers for adding and removing income and expense transactions.

mod create_endpoint;
mod delete_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
