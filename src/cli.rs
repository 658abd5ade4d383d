use clap::Parser;

pub const DEFAULT_URL: &str = "https://www.youtube.com/watch?v=POhK-IlHobc";

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize a YouTube video from its captions",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube watch URL or youtu.be short link
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Ollama model for summarization [default: llama3.2]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama server address (overrides OLLAMA_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Show video ID, model and server
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ytsum"]).unwrap();
        assert_eq!(cli.url, DEFAULT_URL);
        assert!(cli.model.is_none());
        assert!(cli.host.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["ytsum", "https://youtu.be/ABC123", "-m", "mistral", "--host", "gpu:11434", "-v"])
            .unwrap();
        assert_eq!(cli.url, "https://youtu.be/ABC123");
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.host.as_deref(), Some("gpu:11434"));
        assert!(cli.verbose);
    }
}
