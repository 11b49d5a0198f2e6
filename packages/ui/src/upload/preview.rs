//! Object URLs for previewing a picked file before it is uploaded.
//!
//! Every URL handed out by [`create`] must eventually go through [`revoke`].
//! Outside the browser there is nothing to preview and both are no-ops.

use api::UploadFile;

#[cfg(target_arch = "wasm32")]
pub fn create(file: &UploadFile) -> Option<String> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|err| tracing::warn!("preview blob failed: {err:?}"))
        .ok()?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|err| tracing::warn!("preview url failed: {err:?}"))
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub fn revoke(url: &str) {
    if let Err(err) = web_sys::Url::revoke_object_url(url) {
        tracing::warn!("revoking preview url failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create(_file: &UploadFile) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn revoke(_url: &str) {}
