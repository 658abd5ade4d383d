use std::sync::{Arc, Mutex};

use ytsum::{Segment, TranscriptService};

#[derive(Clone)]
pub struct MockTranscriptService {
    pub segments: Vec<Segment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptService {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            segments: texts.iter().map(|t| Segment::new(*t)).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TranscriptService for MockTranscriptService {
    async fn get_transcript(&self, video_id: &str) -> eyre::Result<Vec<Segment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(eyre::eyre!("{}", msg));
        }
        Ok(self.segments.clone())
    }
}
