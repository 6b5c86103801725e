use std::sync::Arc;

use tokio::sync::RwLock;

/// An ordered, append-only list shared between handlers.
///
/// Entries are never mutated or removed; every write is a single push under
/// the lock so readers always see a consistent prefix.
#[derive(Debug)]
pub struct AppendLog<T> {
    entries: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for AppendLog<T> {
    fn clone(&self) -> Self {
        Self { entries: Arc::clone(&self.entries) }
    }
}

impl<T> Default for AppendLog<T> {
    fn default() -> Self {
        Self { entries: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T: Clone> AppendLog<T> {
    /// Appends an entry and returns the new length.
    pub async fn push(&self, entry: T) -> usize {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        entries.len()
    }

    /// Copies the current entries out in insertion order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
