pub mod interface;
pub mod placeholder;

pub use interface::SpeechRecognizer;
pub use placeholder::PlaceholderRecognizer;
