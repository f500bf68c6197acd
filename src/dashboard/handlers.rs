//! Dashboard HTTP handler and page layout.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    alert::alert_view,
    dashboard::{
        cards::{goal_cards_view, summary_cards_view},
        forms::{goal_form_view, transaction_form_view},
        tables::{TransactionFilter, history, transaction_history_view},
    },
    flash::{Flash, take_flash},
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    ledger::{LedgerState, compute_totals},
    storage::JsonStore,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store holding the ledger.
    pub store: JsonStore,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The query parameters accepted by the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// One of "all", "income" or "expense".
    pub filter: Option<String>,
}

/// Display the dashboard with any status message left by the previous request.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    jar: PrivateCookieJar,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let (jar, flash) = take_flash(jar);
    let filter = TransactionFilter::from_query(query.filter.as_deref());
    let ledger = state.store.load();

    (jar, dashboard_view(&ledger, filter, flash.as_ref())).into_response()
}

fn dashboard_view(ledger: &LedgerState, filter: TransactionFilter, flash: Option<&Flash>) -> Markup {
    let totals = compute_totals(ledger);
    let transactions = history(&ledger.transactions, filter);

    let content = html!(
        div class={ (PAGE_CONTAINER_STYLE) " max-w-screen-xl" }
        {
            header class="w-full flex justify-between items-baseline mb-6"
            {
                h1 class="text-3xl font-bold" { "FinanceOS" }
                span class="text-sm text-gray-600 dark:text-gray-400" { "Personal finance tracker" }
            }

            div id="alert-container" class="w-full"
            {
                @if let Some(flash) = flash {
                    (alert_view(flash.severity, &flash.message))
                }
            }

            (summary_cards_view(&totals))

            div class="w-full grid grid-cols-1 lg:grid-cols-3 gap-8"
            {
                aside class="flex flex-col gap-8"
                {
                    (transaction_form_view())
                    (goal_form_view())
                }

                div class="lg:col-span-2 flex flex-col gap-8"
                {
                    section id="goals"
                    {
                        h2 class="text-xl font-semibold mb-4" { "Savings Goals" }
                        (goal_cards_view(&ledger.goals))
                    }

                    section id="history"
                    {
                        h2 class="text-xl font-semibold mb-4" { "Transactions" }
                        (transaction_history_view(&transactions, filter))
                    }
                }
            }
        }
    );

    base("Dashboard", &[dollar_input_styles()], &content)
}
