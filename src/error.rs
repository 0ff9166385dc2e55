//! Failure cases of the dropdown populator.
//!
//! Both kinds are logged to the browser console and swallowed at the top of
//! the page script; neither is surfaced in the UI and nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulateError {
    /// Non-success HTTP status, network failure, or an undecodable body.
    #[error("request failed{}: {detail}", status_suffix(.status))]
    RequestFailed { status: Option<u16>, detail: String },

    /// The target dropdown is not in the document.
    #[error("Select element #querySelect not found on the page")]
    ElementMissing,
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}
