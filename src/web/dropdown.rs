use wasm_bindgen::JsCast;

use crate::catalog::QueryCatalog;
use crate::error::PopulateError;

pub(super) const SELECT_ID: &str = "querySelect";

pub(super) fn target_select(
    document: &web_sys::Document,
) -> Result<web_sys::Element, PopulateError> {
    document
        .get_element_by_id(SELECT_ID)
        .ok_or(PopulateError::ElementMissing)
}

/// Append one `<option>` per catalog entry, value = payload value,
/// visible text = payload label, in catalog order.
pub(super) fn append_options(
    document: &web_sys::Document,
    select: &web_sys::Element,
    catalog: &QueryCatalog,
) -> Result<usize, PopulateError> {
    for entry in catalog.entries() {
        let option = document
            .create_element("option")
            .map_err(|_| processing_failed("document: create_element failed"))?
            .dyn_into::<web_sys::HtmlOptionElement>()
            .map_err(|_| processing_failed("document: option cast failed"))?;

        option.set_value(&entry.value);
        option.set_text_content(Some(&entry.label));

        select
            .append_child(&option)
            .map_err(|_| processing_failed("select: append_child failed"))?;
    }

    Ok(catalog.len())
}

fn processing_failed(detail: &str) -> PopulateError {
    PopulateError::RequestFailed {
        status: None,
        detail: detail.to_string(),
    }
}
