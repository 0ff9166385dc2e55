use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::catalog::QueryCatalog;
use crate::error::PopulateError;

/// GET `url`, check the status, read the body and decode it as a catalog.
/// The await points here are the page script's only suspension region.
pub(super) async fn fetch_catalog(url: &str) -> Result<QueryCatalog, PopulateError> {
    let window = web_sys::window().ok_or_else(|| request_failed("no window"))?;

    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| request_failed(&rejection_detail(&e)))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| request_failed("fetch: expected a Response"))?;

    if !resp.ok() {
        return Err(PopulateError::RequestFailed {
            status: Some(resp.status()),
            detail: "HTTP error".to_string(),
        });
    }

    let body_promise = resp
        .text()
        .map_err(|_| request_failed("response: text() threw"))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|_| request_failed("response: reading body failed"))?;
    let body = body
        .as_string()
        .ok_or_else(|| request_failed("response: body is not a string"))?;

    QueryCatalog::from_json(&body)
}

fn request_failed(detail: &str) -> PopulateError {
    PopulateError::RequestFailed {
        status: None,
        detail: detail.to_string(),
    }
}

fn rejection_detail(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "fetch rejected".to_string())
}
