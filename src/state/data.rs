/// Shared data structures for the portfolio
///
/// These structs represent the case-study catalog that flows from the
/// site configuration into the grid and the detail overlay.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use crate::error::CatalogError;

/// Represents a single case study in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, unique across the catalog
    pub id: String,
    /// Display title (e.g., "Project Alpha")
    pub title: String,
    /// Short description, may be empty
    #[serde(default)]
    pub desc: String,
    /// Image references in display order (e.g., "/portfolio1.jpg")
    #[serde(default, alias = "img")]
    pub images: Vec<String>,
}

impl CatalogEntry {
    pub fn new(id: &str, title: &str, desc: &str, images: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The image shown on the grid card, if the entry has any
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Ordered, read-only list of case studies.
///
/// Entries are handed out as `Arc`s so a selection always points at the
/// entry the catalog holds rather than a copy of it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids and empty titles.
    ///
    /// Entries without images are accepted; they render without pictures.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            if entry.images.is_empty() {
                warn!("⚠️  Portfolio entry '{}' has no images", entry.id);
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The studio's own case studies, compiled into the binary
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new(
                "p1",
                "Project Alpha",
                "Enterprise rebrand + system",
                &["/portfolio1.jpg", "/portfolio1b.jpg", "/portfolio1c.jpg"],
            ),
            CatalogEntry::new(
                "p2",
                "Project Beta",
                "Global logo suite",
                &["/portfolio2.jpg", "/portfolio2b.jpg"],
            ),
            CatalogEntry::new(
                "p3",
                "Project Gamma",
                "Product identity & tokens",
                &["/portfolio3.jpg", "/portfolio3b.jpg"],
            ),
            CatalogEntry::new(
                "p4",
                "Project Delta",
                "Design system integration",
                &["/portfolio4.jpg"],
            ),
        ];

        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        }
    }

    /// All entries in display order
    pub fn list(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&Arc<CatalogEntry>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let entries: Vec<CatalogEntry> = builtin.list().iter().map(|e| (**e).clone()).collect();

        let rebuilt = Catalog::new(entries).unwrap();
        assert_eq!(rebuilt.len(), 4);
        assert!(builtin.list().iter().all(|e| !e.images.is_empty()));
    }

    #[test]
    fn test_list_preserves_order() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("b", "Second", "", &["/b.jpg"]),
            CatalogEntry::new("a", "First", "", &["/a.jpg"]),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            CatalogEntry::new("p1", "One", "", &["/1.jpg"]),
            CatalogEntry::new("p1", "Two", "", &["/2.jpg"]),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "p1"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Catalog::new(vec![CatalogEntry::new("p1", "  ", "", &[])]);
        assert!(matches!(result, Err(CatalogError::EmptyTitle(_))));
    }

    #[test]
    fn test_entry_without_images_is_accepted() {
        let catalog = Catalog::new(vec![CatalogEntry::new("p1", "Bare", "", &[])]).unwrap();
        assert_eq!(catalog.list()[0].primary_image(), None);
    }

    #[test]
    fn test_from_json_accepts_img_alias() {
        let json = r#"[
            {"id": "p1", "title": "Project Alpha", "desc": "Enterprise rebrand + system",
             "img": ["/a1.jpg", "/a2.jpg"]},
            {"id": "p2", "title": "Project Beta", "images": ["/b1.jpg"]}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.list()[0].images, vec!["/a1.jpg", "/a2.jpg"]);
        assert_eq!(catalog.list()[1].desc, "");
        assert_eq!(catalog.get("p2").unwrap().primary_image(), Some("/b1.jpg"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("p1").is_none());
    }
}
