pub mod chat_service;
pub mod transcript_service;
