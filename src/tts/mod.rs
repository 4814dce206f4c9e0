pub mod interface;
pub mod placeholder;

pub use interface::{SpeechSynthesizer, SynthesizedAudio};
pub use placeholder::PlaceholderSynthesizer;
