use soundframe::{BackendClient, Result};

/// Default backend base URL, overridable at build time through
/// `SOUNDFRAME_BACKEND_URL`.
pub const DEFAULT_BACKEND_URL: &str = "https://api.soundframe.app";

pub fn backend_url() -> &'static str {
    option_env!("SOUNDFRAME_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn backend_client() -> Result<BackendClient> {
    BackendClient::builder().base_url(backend_url()).build()
}
