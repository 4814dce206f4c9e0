pub mod interface;
pub mod placeholder;

pub use interface::Translator;
pub use placeholder::PlaceholderTranslator;
