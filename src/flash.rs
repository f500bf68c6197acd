//! Status messages that survive the redirect after a form submission.
//!
//! Every form posts to an endpoint that redirects back to the dashboard. The
//! endpoint stores its status message in a private (encrypted) cookie and the
//! dashboard takes the message out of the cookie jar and displays it once.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use crate::{Error, alert::Severity, endpoints};

pub(crate) const COOKIE_FLASH: &str = "flash";

/// A one-off status message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// The message for a failed request, styled by [Error::severity].
    pub fn from_error(error: &Error) -> Self {
        Self {
            severity: error.severity(),
            message: error.to_string(),
        }
    }

    /// Encode as `severity|message` for storing in a cookie.
    fn encode(&self) -> String {
        format!("{}|{}", self.severity, self.message)
    }

    /// Decode a value written by [Flash::encode].
    ///
    /// Returns `None` if the severity is missing or unknown.
    fn decode(value: &str) -> Option<Self> {
        let (severity, message) = value.split_once('|')?;

        Some(Self {
            severity: severity.parse().ok()?,
            message: message.to_owned(),
        })
    }
}

/// Add `flash` to the cookie jar, replacing any message that has not been shown yet.
pub(crate) fn set_flash(jar: PrivateCookieJar, flash: &Flash) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_FLASH, flash.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict),
    )
}

/// Remove the pending message from the cookie jar.
///
/// Returns the updated jar, which must be included in the response so the
/// client drops the cookie, and the message if there was a valid one.
pub(crate) fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Flash>) {
    let flash = match jar.get(COOKIE_FLASH) {
        Some(cookie) => Flash::decode(cookie.value()),
        None => return (jar, None),
    };

    let jar = jar.remove(Cookie::build(COOKIE_FLASH).path("/"));

    (jar, flash)
}

/// Redirect to the dashboard, which will display `flash`.
pub(crate) fn redirect_with_flash(jar: PrivateCookieJar, flash: Flash) -> Response {
    (
        set_flash(jar, &flash),
        Redirect::to(endpoints::DASHBOARD_VIEW),
    )
        .into_response()
}
