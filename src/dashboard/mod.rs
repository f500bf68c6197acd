//! Dashboard module
//!
//! The single page of the app. Shows the balance summary, the transaction
//! history and the savings goals, along with the forms that change them.

mod cards;
mod forms;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
