/// Image asset handling
///
/// Portfolio entries and static sections refer to images the way a web
/// page does (`/portfolio1.jpg`). This module maps those references onto
/// the configured assets directory and produces cached card thumbnails.

pub mod thumbnail;

use std::path::{Path, PathBuf};

/// Resolve an image reference against the assets directory.
///
/// A leading `/` means "root of the assets directory", not the filesystem
/// root.
pub fn resolve(assets_dir: &Path, reference: &str) -> PathBuf {
    assets_dir.join(reference.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_leading_slash() {
        let dir = Path::new("/srv/site/public");
        assert_eq!(resolve(dir, "/portfolio1.jpg"), dir.join("portfolio1.jpg"));
        assert_eq!(resolve(dir, "logos/logo1.png"), dir.join("logos/logo1.png"));
    }
}
