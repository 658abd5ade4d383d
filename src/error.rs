use thiserror::Error;

/// Why a pipeline stage produced no value
#[derive(Error, Debug)]
pub enum Error {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("could not parse URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("not a valid YouTube URL: {url}")]
    NotYouTube { url: String },

    #[error("could not extract video ID from {url}")]
    NoVideoId { url: String },

    #[error("transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("transcript for video {video_id} is empty")]
    EmptyTranscript { video_id: String },

    #[error("chat request to model {model} failed: {reason}")]
    ChatFailed { model: String, reason: String },

    #[error("model {model} returned an empty reply")]
    EmptySummary { model: String },
}

/// Pipeline stage an error originated in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Request,
    VideoId,
    Transcript,
    Summary,
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::EmptyUrl => Stage::Request,
            Error::InvalidUrl { .. } | Error::NotYouTube { .. } | Error::NoVideoId { .. } => Stage::VideoId,
            Error::TranscriptUnavailable { .. } | Error::EmptyTranscript { .. } => Stage::Transcript,
            Error::ChatFailed { .. } | Error::EmptySummary { .. } => Stage::Summary,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Request => write!(f, "Error creating request"),
            Stage::VideoId => write!(f, "Error extracting video ID"),
            Stage::Transcript => write!(f, "Error getting transcript"),
            Stage::Summary => write!(f, "Error generating summary"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_error() {
        assert_eq!(Error::EmptyUrl.stage(), Stage::Request);
        assert_eq!(
            Error::NotYouTube {
                url: "https://example.com".to_string()
            }
            .stage(),
            Stage::VideoId
        );
        assert_eq!(
            Error::EmptyTranscript {
                video_id: "abc".to_string()
            }
            .stage(),
            Stage::Transcript
        );
        assert_eq!(
            Error::ChatFailed {
                model: "llama3.2".to_string(),
                reason: "connection refused".to_string()
            }
            .stage(),
            Stage::Summary
        );
    }

    #[test]
    fn test_stage_display() {
        let err = Error::NoVideoId {
            url: "https://www.youtube.com/".to_string(),
        };
        assert_eq!(
            format!("{}: {err}", err.stage()),
            "Error extracting video ID: could not extract video ID from https://www.youtube.com/"
        );
    }
}
