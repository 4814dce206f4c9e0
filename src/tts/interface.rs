use async_trait::async_trait;

/// Result of a synthesis call: where the rendered audio can be fetched.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_url: String,
}

/// Text-to-speech capability.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` as speech in the given (already validated) `language`.
    async fn synthesize(&self, language: &str, text: &str)
        -> Result<SynthesizedAudio, anyhow::Error>;
}
