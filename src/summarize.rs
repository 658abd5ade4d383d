use log::{debug, warn};

use crate::ollama::{ChatMessage, ChatService};
use crate::transcript::{TranscriptFetcher, TranscriptService};
use crate::{Error, Request, Result, extract_video_id};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes YouTube videos from a transcript. \
Mention the title of the video and the name of the speaker. \
Also use bullet points wherever possible to make the summary more readable.";

const TRANSCRIPT_PREFIX: &str = "Here is the transcript:\n ";

/// Summarizes the video named by a [`Request`]
pub struct Summarizer<T, C> {
    request: Request,
    transcripts: TranscriptFetcher<T>,
    chat: C,
}

impl<T, C> Summarizer<T, C>
where
    T: TranscriptService + Sync,
    C: ChatService + Sync,
{
    pub fn new(request: Request, transcripts: T, chat: C) -> Self {
        Self {
            request,
            transcripts: TranscriptFetcher::new(transcripts),
            chat,
        }
    }

    pub fn video_id(&self) -> Result<String> {
        extract_video_id(self.request.url())
    }

    pub async fn transcript(&self) -> Result<String> {
        let video_id = self.video_id()?;
        self.transcripts.fetch(&video_id).await
    }

    pub async fn summarize(&self) -> Result<String> {
        let transcript = self.transcript().await?;
        let model = self.request.model();
        debug!("Summarizing {} chars of transcript with model {model}", transcript.len());

        let result = self.ask(model, &build_messages(&transcript)).await;
        if let Err(ref e) = result {
            warn!("{}: {e}", e.stage());
        }
        result
    }

    async fn ask(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let resp = self.chat.chat(model, messages).await.map_err(|e| Error::ChatFailed {
            model: model.to_string(),
            reason: e.to_string(),
        })?;

        let content = resp.message.content;
        if content.trim().is_empty() {
            return Err(Error::EmptySummary {
                model: model.to_string(),
            });
        }
        Ok(content)
    }
}

/// The system instruction followed by the transcript as the user turn
pub fn build_messages(transcript: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{TRANSCRIPT_PREFIX}{transcript}")),
    ]
}
