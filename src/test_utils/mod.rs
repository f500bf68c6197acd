#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

use tempfile::TempDir;

use crate::{AppState, storage::JsonStore};

pub(crate) use form::{
    assert_form_input, assert_form_submit_button_with_text, must_get_form_with_action,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::{assert_content_type, assert_status_ok, get_header};

/// Create a store backed by a file in a fresh temporary directory.
///
/// The directory is deleted when the returned [TempDir] is dropped, so keep
/// it alive for as long as the store is used.
#[track_caller]
pub(crate) fn must_create_test_store() -> (TempDir, JsonStore) {
    let dir = tempfile::tempdir().expect("Could not create temporary directory");
    let store = JsonStore::new(dir.path().join("finance_data.json"));

    (dir, store)
}

#[track_caller]
pub(crate) fn must_create_test_app_state() -> (TempDir, AppState) {
    let (dir, store) = must_create_test_store();

    (dir, AppState::new(store, Some("foobar")))
}
