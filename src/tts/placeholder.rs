use async_trait::async_trait;

use super::interface::{SpeechSynthesizer, SynthesizedAudio};

/// Stand-in synthesizer. Points at a fixed URL; no audio is produced.
pub struct PlaceholderSynthesizer;

#[async_trait]
impl SpeechSynthesizer for PlaceholderSynthesizer {
    async fn synthesize(
        &self,
        _language: &str,
        _text: &str,
    ) -> Result<SynthesizedAudio, anyhow::Error> {
        Ok(SynthesizedAudio {
            audio_url: "https://audio-service/voice-output.mp3".to_string(),
        })
    }
}
