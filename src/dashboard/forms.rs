//! The forms for adding transactions and goals.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    ledger::{DEFAULT_CATEGORY, DEFAULT_GOAL_EMOJI, TransactionType},
};

pub(super) fn transaction_form_view() -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::POST_TRANSACTION)
            class={ (CARD_STYLE) " w-full space-y-4" }
        {
            h3 class="text-xl font-semibold" { "Add Transaction" }

            fieldset {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE) {
                    @for kind in [TransactionType::Income, TransactionType::Expense] {
                        label class="flex-1" {
                            input
                                type="radio"
                                name="type"
                                value=(kind.as_str())
                                checked[kind == TransactionType::Income]
                                class=(FORM_RADIO_INPUT_STYLE);

                            span class=(FORM_RADIO_LABEL_STYLE) { (kind) }
                        }
                    }
                }
            }

            div {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="e.g. Groceries"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                div class="input-wrapper" {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder=(DEFAULT_CATEGORY)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

pub(super) fn goal_form_view() -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::POST_GOAL)
            class={ (CARD_STYLE) " w-full space-y-4" }
        {
            h3 class="text-xl font-semibold" { "New Goal" }

            div {
                label for="goal-name" class=(FORM_LABEL_STYLE) { "Name" }
                input
                    id="goal-name"
                    type="text"
                    name="name"
                    placeholder="e.g. Holiday"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div {
                label for="goal-target" class=(FORM_LABEL_STYLE) { "Target" }
                div class="input-wrapper" {
                    input
                        id="goal-target"
                        type="number"
                        name="target"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div {
                label for="goal-emoji" class=(FORM_LABEL_STYLE) { "Emoji" }
                input
                    id="goal-emoji"
                    type="text"
                    name="emoji"
                    maxlength="8"
                    placeholder=(DEFAULT_GOAL_EMOJI)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Goal" }
        }
    }
}
