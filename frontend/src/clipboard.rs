use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Writes `text` to the system clipboard. Rejections (permissions, insecure
/// context) come back as an error string for the caller to log.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "No window available".to_string())?;
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
