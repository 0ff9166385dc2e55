//! DOM side of the page script: fire once on document readiness, fetch the
//! catalog, fill the dropdown. Errors go to the console and stop there.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::error::PopulateError;

mod dropdown;
mod fetch;

pub(crate) const QUERIES_ENDPOINT: &str = "/api/queries";

/// Entrypoint. Runs `populate` once the document's structural content has
/// finished loading; if the DOM is already parsed when the wasm module
/// initializes, runs it immediately.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        console_error("no document; dropdown populator not started");
        return;
    };

    if document.ready_state() == "loading" {
        let cb = Closure::once(|| spawn_local(populate()));
        match document
            .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        {
            Ok(()) => cb.forget(),
            // No listener was installed, so the direct run cannot double up.
            Err(_) => spawn_local(populate()),
        }
    } else {
        spawn_local(populate());
    }
}

/// The single fetch-decode-append pipeline. All failures are terminal and
/// silent from the page's perspective.
async fn populate() {
    match populate_inner().await {
        Ok(_) => {}
        Err(err @ PopulateError::ElementMissing) => console_error(&err.to_string()),
        Err(err) => {
            console_error(&format!("Failed to load data from {QUERIES_ENDPOINT}: {err}"))
        }
    }
}

async fn populate_inner() -> Result<usize, PopulateError> {
    let catalog = fetch::fetch_catalog(QUERIES_ENDPOINT).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PopulateError::ElementMissing)?;
    let select = dropdown::target_select(&document)?;

    dropdown::append_options(&document, &select, &catalog)
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
