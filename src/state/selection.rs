use std::sync::Arc;
use tracing::debug;

use super::data::CatalogEntry;

/// The case study currently shown in the detail overlay, if any.
///
/// Owned by the portfolio section. `select` and `clear` are the only
/// mutators.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<Arc<CatalogEntry>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `entry`, replacing whatever was shown before
    pub fn select(&mut self, entry: Arc<CatalogEntry>) {
        debug!("Selected case study '{}'", entry.id);
        self.current = Some(entry);
    }

    /// Hide the overlay. Calling this when nothing is selected is a no-op.
    pub fn clear(&mut self) {
        if let Some(entry) = self.current.take() {
            debug!("Cleared selection of '{}'", entry.id);
        }
    }

    pub fn current(&self) -> Option<&Arc<CatalogEntry>> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Arc<CatalogEntry> {
        Arc::new(CatalogEntry::new(id, id, "", &["/x.jpg"]))
    }

    #[test]
    fn test_starts_empty() {
        assert!(!Selection::new().is_open());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut selection = Selection::new();
        selection.clear();
        assert!(selection.current().is_none());

        selection.select(entry("p1"));
        selection.clear();
        selection.clear();
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_reselect_replaces() {
        let mut selection = Selection::new();
        let first = entry("p1");
        let second = entry("p2");

        selection.select(first);
        selection.select(Arc::clone(&second));

        assert!(Arc::ptr_eq(selection.current().unwrap(), &second));
    }
}
