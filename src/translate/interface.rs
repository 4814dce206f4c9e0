use async_trait::async_trait;

/// Translation capability. Validation and routing never look past this
/// trait, so a real provider can replace the placeholder without touching
/// either.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target`. Both languages are
    /// already validated against the supported catalog by the caller.
    async fn translate(&self, source: &str, target: &str, text: &str)
        -> Result<String, anyhow::Error>;

    /// Human-readable note on how the translation was produced, used when
    /// the client asks for an explanation alongside the result.
    fn explanation(&self, source: &str, target: &str) -> String {
        format!(
            "This sentence was translated from {source} to {target} \
             using AI contextual understanding."
        )
    }
}
