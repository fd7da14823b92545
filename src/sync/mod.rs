//! Sync engine — rebuilds the target document from the source document,
//! reusing translations whose source text has not changed since the last run.
//!
//! Each key lands in exactly one bucket:
//! - override — a manual translation exists, applied unconditionally
//! - reuse — the snapshot still matches the source and the old translation is non-blank
//! - translate — everything else goes to the translation backend

#[cfg(test)]
mod tests;

use localesync_core::{overrides::Overrides, store::Mapping, traits::Translator};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Default pause after each live translation call.
const DEFAULT_PACE: Duration = Duration::from_millis(60);

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub reused: usize,
    pub translated: usize,
    pub total: usize,
}

impl fmt::Display for SyncStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reused, {} translated, {} total.",
            self.reused, self.translated, self.total
        )
    }
}

/// Result of one sync run: the documents to persist plus counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub target: Mapping,
    pub snapshot: Mapping,
    pub stats: SyncStats,
}

/// Incremental source → target synchronizer.
pub struct SyncEngine<'a> {
    translator: &'a dyn Translator,
    overrides: &'a Overrides,
    pace: Duration,
}

impl<'a> SyncEngine<'a> {
    pub fn new(translator: &'a dyn Translator, overrides: &'a Overrides) -> Self {
        Self {
            translator,
            overrides,
            pace: DEFAULT_PACE,
        }
    }

    /// Set the pause after each live translation call. Zero disables it.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Rebuild target and snapshot for every key in `source`.
    ///
    /// Keys are visited in ascending order. Keys missing from `source` do not
    /// appear in the outcome.
    pub async fn run(
        &self,
        source: &Mapping,
        existing_target: &Mapping,
        existing_snapshot: &Mapping,
    ) -> SyncOutcome {
        let mut outcome = SyncOutcome::default();

        for (key, source_value) in source {
            let target_value = if let Some(fixed) = self.overrides.get(key) {
                debug!("{key}: override");
                outcome.stats.reused += 1;
                fixed.to_string()
            } else if let Some(previous) =
                reusable(key, source_value, existing_target, existing_snapshot)
            {
                debug!("{key}: reused");
                outcome.stats.reused += 1;
                previous.to_string()
            } else {
                debug!("{key}: translating via {}", self.translator.name());
                let translated = self.translator.translate(source_value).await;
                outcome.stats.translated += 1;
                if !self.pace.is_zero() {
                    tokio::time::sleep(self.pace).await;
                }
                if translated.is_empty() {
                    source_value.clone()
                } else {
                    translated
                }
            };

            outcome.target.insert(key.clone(), target_value);
            outcome.snapshot.insert(key.clone(), source_value.clone());
        }

        outcome.stats.total = source.len();
        info!("sync finished: {}", outcome.stats);
        outcome
    }
}

/// The previous translation, if it is non-blank and was made from the same
/// source text.
fn reusable<'m>(
    key: &str,
    source_value: &str,
    existing_target: &'m Mapping,
    existing_snapshot: &Mapping,
) -> Option<&'m str> {
    let previous = existing_target.get(key)?;
    if previous.trim().is_empty() {
        return None;
    }
    (existing_snapshot.get(key).map(String::as_str) == Some(source_value))
        .then_some(previous.as_str())
}
