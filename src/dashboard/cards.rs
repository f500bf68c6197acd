//! Card components for the balance summary and the savings goals.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE,
        format_currency,
    },
    ledger::{Goal, Totals},
};

const CARD_LABEL_STYLE: &str = "text-sm font-medium text-gray-600 dark:text-gray-400";
const CARD_AMOUNT_STYLE: &str = "text-3xl font-bold mb-1";
const CARD_DETAIL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Renders the four summary cards at the top of the dashboard.
pub(super) fn summary_cards_view(totals: &Totals) -> Markup {
    html! {
        section
            id="summary"
            class="w-full grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8"
        {
            (summary_card(
                "balance",
                "Available Balance",
                totals.balance,
                "Income minus expenses and savings".to_owned(),
            ))
            (summary_card(
                "income",
                "Total Income",
                totals.income,
                plural(totals.income_count, "transaction"),
            ))
            (summary_card(
                "expense",
                "Total Expenses",
                totals.expense,
                plural(totals.expense_count, "transaction"),
            ))
            (summary_card(
                "goals",
                "Saved in Goals",
                totals.goals_saved,
                plural(totals.goals_count, "goal"),
            ))
        }
    }
}

fn summary_card(id: &str, label: &str, amount: f64, detail: String) -> Markup {
    let amount_style = if amount < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        ""
    };

    html! {
        div
            id={ "summary-" (id) }
            class=(CARD_STYLE)
        {
            div class=(CARD_LABEL_STYLE) { (label) }
            div class={ (CARD_AMOUNT_STYLE) " " (amount_style) } data-amount=(amount) {
                (format_currency(amount))
            }
            div class=(CARD_DETAIL_STYLE) { (detail) }
        }
    }
}

/// Renders the grid of goal cards, or a short prompt when there are no goals.
pub(super) fn goal_cards_view(goals: &[Goal]) -> Markup {
    html! {
        @if goals.is_empty() {
            p id="no-goals" class="text-gray-600 dark:text-gray-400" {
                "No savings goals yet. Create one to start putting money aside."
            }
        } @else {
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4" {
                @for goal in goals {
                    (goal_card(goal))
                }
            }
        }
    }
}

fn goal_card(goal: &Goal) -> Markup {
    let contribute_route = format_endpoint(endpoints::CONTRIBUTE_TO_GOAL, &goal.id);
    let withdraw_route = format_endpoint(endpoints::WITHDRAW_FROM_GOAL, &goal.id);
    let delete_route = format_endpoint(endpoints::DELETE_GOAL, &goal.id);
    let progress = goal.progress_percent();

    html! {
        div
            class={ (CARD_STYLE) " flex flex-col gap-3" }
            data-goal-id=(goal.id)
        {
            div class="flex justify-between items-baseline" {
                h4 class="text-lg font-semibold truncate" title=(goal.name) {
                    span class="mr-2" { (goal.emoji) }
                    (goal.name)
                }
                span class=(CARD_DETAIL_STYLE) { (format!("{progress:.0}%")) }
            }

            div class="text-sm" {
                span class="font-bold" { (format_currency(goal.saved)) }
                " of " (format_currency(goal.target))
            }

            (progress_bar(progress))

            form
                method="post"
                action=(contribute_route)
                class="flex gap-2"
            {
                div class="input-wrapper flex-1" {
                    input
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        aria-label={ "Amount to add to " (goal.name) }
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Add" }
            }

            div class="flex justify-end gap-4" {
                @if goal.saved > 0.0 {
                    form method="post" action=(withdraw_route) {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Withdraw" }
                    }
                }

                form
                    method="post"
                    action=(delete_route)
                    onsubmit="return confirm('Delete this goal? Anything saved goes back to your balance.')"
                {
                    button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                }
            }
        }
    }
}

/// Renders a horizontal progress bar, `percentage` must be in 0..=100.
fn progress_bar(percentage: f64) -> Markup {
    // Ensure minimum 3% width so rounded corners are visible
    let display_percentage = if percentage > 0.0 && percentage < 3.0 {
        3.0
    } else {
        percentage
    };

    html! {
        div
            class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5"
            role="progressbar"
            aria-valuenow=(format!("{percentage:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if percentage > 0.0 {
                div
                    class="bg-blue-600 dark:bg-blue-500 h-2.5 rounded-full transition-all"
                    style=(format!("width: {display_percentage:.1}%"))
                {}
            }
        }
    }
}
