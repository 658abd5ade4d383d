use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use lru::LruCache;

use crate::{Error, Result, Segment};

/// Number of transcripts kept in memory
pub const CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Source of caption segments for a video
pub trait TranscriptService {
    fn get_transcript(&self, video_id: &str) -> impl Future<Output = eyre::Result<Vec<Segment>>> + Send;
}

/// Fetches transcripts and remembers the most recent ones
pub struct TranscriptFetcher<S> {
    service: S,
    cache: Mutex<LruCache<String, String>>,
}

impl<S: TranscriptService + Sync> TranscriptFetcher<S> {
    pub fn new(service: S) -> Self {
        Self::with_capacity(service, CACHE_CAPACITY)
    }

    pub fn with_capacity(service: S, capacity: NonZeroUsize) -> Self {
        Self {
            service,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Transcript for `video_id`, served from cache when possible
    pub async fn fetch(&self, video_id: &str) -> Result<String> {
        if let Some(hit) = self.cached(video_id) {
            debug!("Transcript cache hit: {video_id}");
            return Ok(hit);
        }

        let result = self.fetch_uncached(video_id).await;
        match result {
            Ok(ref text) => {
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .put(video_id.to_string(), text.clone());
            }
            Err(ref e) => warn!("{}: {e}", e.stage()),
        }
        result
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn cached(&self, video_id: &str) -> Option<String> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(video_id)
            .cloned()
    }

    async fn fetch_uncached(&self, video_id: &str) -> Result<String> {
        debug!("Fetching transcript for {video_id}");
        let segments = self
            .service
            .get_transcript(video_id)
            .await
            .map_err(|e| Error::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        let text = join_segments(&segments);
        if text.trim().is_empty() {
            return Err(Error::EmptyTranscript {
                video_id: video_id.to_string(),
            });
        }
        debug!("Transcript for {video_id}: {} segments, {} chars", segments.len(), text.len());
        Ok(text)
    }
}

/// Join segment texts with single spaces, in order
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ")
}
