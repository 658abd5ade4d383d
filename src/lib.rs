pub mod config;
pub mod error;
pub mod ollama;
pub mod summarize;
pub mod transcript;
pub mod youtube;

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

pub use error::{Error, Result, Stage};
pub use ollama::{ChatMessage, ChatResponse, ChatService, OllamaClient, Role};
pub use summarize::Summarizer;
pub use transcript::{TranscriptFetcher, TranscriptService};
pub use youtube::CaptionClient;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "llama3.2";

const LONG_DOMAIN: &str = "youtube.com";
const SHORT_DOMAIN: &str = "youtu.be";

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// The video to summarize and the model to summarize it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    model: String,
}

impl Request {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::EmptyUrl);
        }
        Ok(Self {
            url,
            model: model.into(),
        })
    }

    pub fn with_default_model(url: impl Into<String>) -> Result<Self> {
        Self::new(url, DEFAULT_MODEL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Extract the video ID from a youtube.com watch URL or a youtu.be short link
pub fn extract_video_id(input: &str) -> Result<String> {
    let result = parse_video_id(input.trim());
    if let Err(ref e) = result {
        warn!("{}: {e}", e.stage());
    }
    result
}

fn parse_video_id(input: &str) -> Result<String> {
    let parsed = Url::parse(input).map_err(|source| Error::InvalidUrl {
        url: input.to_string(),
        source,
    })?;
    let host = parsed.host_str().unwrap_or_default();

    if !host.contains(LONG_DOMAIN) && !host.contains(SHORT_DOMAIN) {
        return Err(Error::NotYouTube { url: input.to_string() });
    }

    // Blank values count as missing
    if let Some((_, id)) = parsed.query_pairs().find(|(k, v)| k == "v" && !v.is_empty()) {
        return Ok(id.into_owned());
    }

    if host.contains(SHORT_DOMAIN) {
        if let Some(id) = parsed.path().strip_prefix('/').filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }
    }

    Err(Error::NoVideoId { url: input.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=ABC123").unwrap(),
            "ABC123"
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?t=120&v=dQw4w9WgXcQ&list=PL1").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_first_v_param_wins() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=first&v=second").unwrap(),
            "first"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/ABC123").unwrap(), "ABC123");
    }

    #[test]
    fn test_short_url_with_query() {
        assert_eq!(extract_video_id("https://youtu.be/ABC123?si=xyz").unwrap(), "ABC123");
    }

    #[test]
    fn test_short_url_prefers_v_param() {
        assert_eq!(extract_video_id("https://youtu.be/ignored?v=ABC123").unwrap(), "ABC123");
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(
            extract_video_id("  https://www.youtube.com/watch?v=ABC123  ").unwrap(),
            "ABC123"
        );
    }

    #[test]
    fn test_unrelated_host() {
        assert!(matches!(
            extract_video_id("https://example.com/watch?v=ABC123"),
            Err(Error::NotYouTube { .. })
        ));
    }

    #[test]
    fn test_long_domain_without_v() {
        assert!(matches!(
            extract_video_id("https://www.youtube.com/embed/ABC123"),
            Err(Error::NoVideoId { .. })
        ));
    }

    #[test]
    fn test_empty_v_param() {
        assert!(matches!(
            extract_video_id("https://www.youtube.com/watch?v="),
            Err(Error::NoVideoId { .. })
        ));
    }

    #[test]
    fn test_short_url_without_path() {
        assert!(matches!(
            extract_video_id("https://youtu.be/"),
            Err(Error::NoVideoId { .. })
        ));
    }

    #[test]
    fn test_unparseable_url() {
        assert!(matches!(
            extract_video_id("youtube.com/watch?v=ABC123"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(extract_video_id(""), Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_request_rejects_empty_url() {
        assert!(matches!(Request::with_default_model(""), Err(Error::EmptyUrl)));
        assert!(matches!(Request::new("   ", "llama3.2"), Err(Error::EmptyUrl)));
    }

    #[test]
    fn test_request_default_model() {
        let request = Request::with_default_model("https://youtu.be/ABC123").unwrap();
        assert_eq!(request.url(), "https://youtu.be/ABC123");
        assert_eq!(request.model(), "llama3.2");
    }
}
