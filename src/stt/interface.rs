use async_trait::async_trait;

/// Speech-to-text capability.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe the most recent captured audio into text.
    async fn transcribe(&self) -> Result<String, anyhow::Error>;
}
