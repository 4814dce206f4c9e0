use async_trait::async_trait;

use super::interface::Translator;

/// Stand-in translator until a real provider is wired up. Echoes the input
/// tagged with the target language.
pub struct PlaceholderTranslator;

#[async_trait]
impl Translator for PlaceholderTranslator {
    async fn translate(
        &self,
        _source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, anyhow::Error> {
        Ok(format!("[Translated to {target}]: {text}"))
    }
}
