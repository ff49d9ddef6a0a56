// crates/infra/src/observer.rs
use wordtally_domain::{TableObserver, WordFrequency};

/// Reports frequency-table mutations as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TableObserver for TracingObserver {
    fn on_insert(&self, entry: &WordFrequency) {
        tracing::debug!(word = entry.word(), "inserted new word");
    }

    fn on_increment(&self, entry: &WordFrequency) {
        tracing::trace!(word = entry.word(), count = entry.count(), "incremented word");
    }
}
