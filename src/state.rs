use std::sync::Arc;

use crate::config::Config;
use crate::stt::{PlaceholderRecognizer, SpeechRecognizer};
use crate::translate::{PlaceholderTranslator, Translator};
use crate::tts::{PlaceholderSynthesizer, SpeechSynthesizer};
use crate::tutor::{PlaceholderTutor, Tutor};

/// Shared application state. Everything here is read-only after startup,
/// so handlers clone it freely with no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn Translator>,
    pub tutor: Arc<dyn Tutor>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
}

impl AppState {
    /// Build state with the placeholder providers. Real providers slot in
    /// here once their integrations exist.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            translator: Arc::new(PlaceholderTranslator),
            tutor: Arc::new(PlaceholderTutor),
            synthesizer: Arc::new(PlaceholderSynthesizer),
            recognizer: Arc::new(PlaceholderRecognizer),
        }
    }
}
