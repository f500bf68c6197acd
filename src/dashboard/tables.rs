//! The transaction history table and its filter tabs.

use std::cmp::Reverse;

use maud::{Markup, html};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
    ledger::{Transaction, TransactionType},
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";
const TAB_STYLE: &str = "px-3 py-1 rounded text-sm font-medium";
const TAB_ACTIVE_STYLE: &str = "bg-blue-600 text-white";

/// Which transactions to show in the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    /// Parse the `filter` query parameter, anything unrecognised shows everything.
    pub(super) fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("income") => Self::Income,
            Some("expense") => Self::Expense,
            _ => Self::All,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }

    fn href(&self) -> String {
        match self {
            Self::All => endpoints::DASHBOARD_VIEW.to_owned(),
            Self::Income => format!("{}?filter=income", endpoints::DASHBOARD_VIEW),
            Self::Expense => format!("{}?filter=expense", endpoints::DASHBOARD_VIEW),
        }
    }

    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => transaction.kind == TransactionType::Income,
            Self::Expense => transaction.kind == TransactionType::Expense,
        }
    }
}

/// Select the transactions that pass `filter`, newest first.
///
/// Transactions with the same timestamp keep the most recently added first.
pub(super) fn history<'a>(
    transactions: &'a [Transaction],
    filter: TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut selected: Vec<_> = transactions
        .iter()
        .rev()
        .filter(|transaction| filter.matches(transaction))
        .collect();

    selected.sort_by_key(|transaction| Reverse(transaction.created_at));

    selected
}

fn format_date(date: OffsetDateTime) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.date().to_string())
}

/// Renders the filter tabs followed by the history table.
pub(super) fn transaction_history_view(
    transactions: &[&Transaction],
    filter: TransactionFilter,
) -> Markup {
    html! {
        nav class="flex gap-2 mb-4" aria-label="Filter transactions" {
            @for tab in [TransactionFilter::All, TransactionFilter::Income, TransactionFilter::Expense] {
                @if tab == filter {
                    a
                        href=(tab.href())
                        aria-current="page"
                        class={ (TAB_STYLE) " " (TAB_ACTIVE_STYLE) }
                    {
                        (tab.label())
                    }
                } @else {
                    a href=(tab.href()) class={ (TAB_STYLE) " " (LINK_STYLE) } {
                        (tab.label())
                    }
                }
            }
        }

        @if transactions.is_empty() {
            p id="no-transactions" class="text-gray-600 dark:text-gray-400" {
                "No transactions to show."
            }
        } @else {
            div class="overflow-x-auto rounded-lg shadow" {
                table
                    id="transactions"
                    class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                        }
                    }
                    tbody {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_route = format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id);
    let (sign, amount_style) = match transaction.kind {
        TransactionType::Income => ("+", TABLE_CELL_GREEN_STYLE),
        TransactionType::Expense => ("-", TABLE_CELL_RED_STYLE),
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id) data-type=(transaction.kind.as_str()) {
            td class={ (TABLE_CELL_STYLE) " whitespace-nowrap" } {
                (format_date(transaction.created_at))
            }
            td class={ (TABLE_CELL_STYLE) " text-gray-900 dark:text-white" } {
                (transaction.description)
            }
            td class=(TABLE_CELL_STYLE) {
                span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
            }
            td class={ (TABLE_CELL_STYLE) " text-right whitespace-nowrap " (amount_style) } {
                (sign) (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE) {
                form
                    method="post"
                    action=(delete_route)
                    onsubmit="return confirm('Delete this transaction?')"
                {
                    button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                }
            }
        }
    }
}
