//! Alert system for displaying status messages to users.
//!
//! Alerts are rendered at the top of the dashboard after a form submission.

use std::{fmt::Display, str::FromStr};

use maud::{Markup, html};

/// How serious a status message is, which controls how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something the user asked for could not be done.
    Error,
    /// The user made a mistake in a form.
    Warning,
    /// Neutral information, e.g. an item was deleted.
    Info,
    /// The user's request was completed.
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    fn container_style(&self) -> &'static str {
        match self {
            Severity::Error => {
                "text-red-800 border-red-300 bg-red-50 dark:bg-gray-800 \
                dark:text-red-400 dark:border-red-800"
            }
            Severity::Warning => {
                "text-yellow-800 border-yellow-300 bg-yellow-50 dark:bg-gray-800 \
                dark:text-yellow-300 dark:border-yellow-800"
            }
            Severity::Info => {
                "text-blue-800 border-blue-300 bg-blue-50 dark:bg-gray-800 \
                dark:text-blue-400 dark:border-blue-800"
            }
            Severity::Success => {
                "text-green-800 border-green-300 bg-green-50 dark:bg-gray-800 \
                dark:text-green-400 dark:border-green-800"
            }
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            _ => Err(()),
        }
    }
}

/// Renders a dismissable alert.
///
/// The alert carries `role="alert"` and a `data-severity` attribute so that
/// scripts and tests can find it.
pub fn alert_view(severity: Severity, message: &str) -> Markup {
    // Template adapted from https://flowbite.com/docs/components/alerts/
    html! {
        div
            id="alert"
            role="alert"
            data-severity=(severity.as_str())
            class={ "flex items-center justify-between p-4 mb-4 text-sm border rounded-lg " (severity.container_style()) }
        {
            span class="font-medium" { (message) }

            button
                type="button"
                aria-label="Dismiss"
                class="ms-4 font-bold bg-transparent border-none cursor-pointer"
                onclick="this.parentElement.remove()"
            {
                "×"
            }
        }
    }
}
