use crate::error::{ApiError, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

/// Public image-generation endpoint. The prompt rides in the path, the
/// rendering options in the query string.
pub const IMAGE_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Rendering options forwarded to the image endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterParams {
    pub model: String,
    pub format: String,
    pub nologo: bool,
    pub private: bool,
}

impl Default for PosterParams {
    fn default() -> Self {
        Self {
            model: "flux".to_string(),
            format: "png".to_string(),
            nologo: true,
            private: true,
        }
    }
}

/// Fetches generated posters from the public image endpoint.
#[derive(Debug, Clone, Default)]
pub struct PosterClient {
    client: Client,
    params: PosterParams,
}

impl PosterClient {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_params(params: PosterParams) -> Self {
        Self {
            client: Client::new(),
            params,
        }
    }

    /// Downloads the poster for `prompt` and returns the raw image bytes.
    pub async fn fetch(&self, prompt: &str) -> Result<Vec<u8>> {
        let url = poster_url(prompt, &self.params)?;
        info!("Fetching poster from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Backend prompts sometimes arrive with a trailing "label: detail" tail that
/// confuses the image model. Cut at the last colon and keep what precedes it,
/// falling back to the whole (trimmed) text when that would leave nothing.
pub fn trim_prompt(prompt: &str) -> &str {
    let cut = match prompt.rfind(':') {
        Some(idx) => prompt[..idx].trim(),
        None => prompt.trim(),
    };
    if cut.is_empty() {
        prompt.trim()
    } else {
        cut
    }
}

/// Builds the image URL: percent-encoded prompt as the final path segment,
/// fixed rendering parameters in the query string.
pub fn poster_url(prompt: &str, params: &PosterParams) -> Result<Url> {
    let mut url = Url::parse(IMAGE_BASE_URL)?;
    url.path_segments_mut()
        .expect("image base URL cannot be a base")
        .pop_if_empty()
        .push(prompt);
    url.query_pairs_mut()
        .append_pair("model", &params.model)
        .append_pair("format", &params.format)
        .append_pair("nologo", bool_str(params.nologo))
        .append_pair("private", bool_str(params.private));
    Ok(url)
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_prompt_cuts_at_last_colon() {
        assert_eq!(
            trim_prompt("a surreal collage of: guitars, featuring: Tame Impala"),
            "a surreal collage of: guitars, featuring"
        );
    }

    #[test]
    fn trim_prompt_without_colon_is_identity() {
        assert_eq!(trim_prompt("  dreamy synthwave skyline "), "dreamy synthwave skyline");
    }

    #[test]
    fn trim_prompt_falls_back_when_cut_is_empty() {
        assert_eq!(trim_prompt(": all detail after the colon"), ": all detail after the colon");
        assert_eq!(trim_prompt("  : tail"), ": tail");
    }

    #[test]
    fn poster_url_encodes_prompt_and_carries_params() {
        let url = poster_url("neon jazz poster", &PosterParams::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://image.pollinations.ai/prompt/neon%20jazz%20poster?model=flux&format=png&nologo=true&private=true"
        );
    }

    #[test]
    fn poster_url_keeps_prompt_in_a_single_segment() {
        let url = poster_url("a/b?c", &PosterParams::default()).unwrap();
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments[0], "prompt");
        assert_eq!(segments.len(), 2);
        // The slash and question mark must not split the path or start the query.
        assert!(segments[1].contains("%2F"));
        assert!(segments[1].contains("%3F"));
    }

    #[test]
    fn poster_url_honours_custom_params() {
        let params = PosterParams {
            model: "turbo".to_string(),
            format: "jpeg".to_string(),
            nologo: false,
            private: false,
        };
        let url = poster_url("x", &params).unwrap();
        assert_eq!(
            url.query(),
            Some("model=turbo&format=jpeg&nologo=false&private=false")
        );
    }
}
