use async_trait::async_trait;

/// Translation backend.
///
/// Implementations own their retry policy and never fail: when every attempt
/// is exhausted they hand back the input text unchanged, so one bad entry
/// cannot abort a whole sync run.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` from the source language to the target language.
    async fn translate(&self, text: &str) -> String;
}
