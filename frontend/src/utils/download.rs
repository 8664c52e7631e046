use wasm_bindgen::JsCast;

use super::storage::window;

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    let document = window()?.document().ok_or("No document")?;
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Downloads `csv_data`, logging instead of failing when the browser refuses.
pub fn download_csv_or_log(filename: &str, csv_data: &str) {
    if let Err(err) = trigger_csv_download(filename, csv_data) {
        log::error!("csv export `{filename}` failed: {err}");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn download_without_window_reports_error() {
        let err = trigger_csv_download("x.csv", "\"a\"\n").unwrap_err();
        assert_eq!(err, "No window object");
    }
}
