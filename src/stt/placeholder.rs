use async_trait::async_trait;

use super::interface::SpeechRecognizer;

/// Stand-in recognizer. No audio is consumed; the transcript is fixed.
pub struct PlaceholderRecognizer;

#[async_trait]
impl SpeechRecognizer for PlaceholderRecognizer {
    async fn transcribe(&self) -> Result<String, anyhow::Error> {
        Ok("Recognized speech will appear here".to_string())
    }
}
