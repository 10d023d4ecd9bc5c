//! In-memory journal of stock mutations.

use chrono::Local;

/// Ordered, caller-owned log of stock mutations.
///
/// Entries are plain human-readable strings stamped with local wall-clock
/// time at append. The journal is diagnostic only: it is never persisted and
/// never consulted by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, prefixed with the current local time.
    pub fn record(&mut self, message: impl AsRef<str>) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        self.entries.push(format!("{stamp}: {}", message.as_ref()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
