//! WebSys glue: query string, external navigation and object URLs. Everything
//! is gated on wasm32 so the crate still compiles natively for tests.

/// The current location's query string, `?` included.
pub fn current_query() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        return window.location().search().unwrap_or_default();
    }
    String::new()
}

/// Full page navigation, used for the OAuth login redirect.
pub fn redirect_to(_url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(_url);
    }
}

/// Wraps freshly fetched poster bytes in a Blob and returns an object URL
/// for it. The caller owns the URL and must revoke it when replacing it.
pub fn create_object_url(_bytes: &[u8]) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{Blob, BlobPropertyBag, Url};

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(_bytes));
        let options = BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        return Url::create_object_url_with_blob(&blob).ok();
    }
    #[allow(unreachable_code)]
    None
}

/// Releases a previously created object URL.
pub fn revoke_object_url(_url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = web_sys::Url::revoke_object_url(_url);
    }
}
