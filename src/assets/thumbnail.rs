use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AssetError;

/// Size of generated thumbnails (bounding square)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/brand-showcase/thumbnails on Linux
pub fn thumbnail_cache_dir() -> Result<PathBuf, AssetError> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(AssetError::NoCacheDir)?;

    path.push("brand-showcase");
    path.push("thumbnails");

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Where the thumbnail for `entry_id` lives in `cache_dir`
pub fn thumbnail_path(cache_dir: &Path, entry_id: &str) -> PathBuf {
    // Ids are opaque strings; keep them from escaping the cache dir
    let safe: String = entry_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    cache_dir.join(format!("{}.png", safe))
}

/// Generate (or reuse) the thumbnail for an entry's primary image
pub fn generate_thumbnail(
    source: &Path,
    cache_dir: &Path,
    entry_id: &str,
) -> Result<PathBuf, AssetError> {
    if !source.is_file() {
        return Err(AssetError::NotFound(source.to_path_buf()));
    }

    let target = thumbnail_path(cache_dir, entry_id);
    if is_fresh(source, &target) {
        debug!("Thumbnail cache hit: {}", target.display());
        return Ok(target);
    }

    let img = image::open(source).map_err(|source_err| AssetError::Decode {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    // Resize to fit the bounding square, keeping aspect ratio
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    fs::create_dir_all(cache_dir)?;
    thumbnail.save(&target).map_err(|source_err| AssetError::Save {
        path: target.clone(),
        source: source_err,
    })?;

    info!("📸 Generated thumbnail: {}", target.display());
    Ok(target)
}

/// A cached thumbnail is reusable when it is at least as new as its source
fn is_fresh(source: &Path, target: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();

    match (modified(source), modified(target)) {
        (Some(source_time), Some(target_time)) => target_time >= source_time,
        _ => false,
    }
}

/// Generate a thumbnail off the UI thread.
///
/// The error is flattened to a string so it can travel inside a `Message`.
pub async fn load_thumbnail(
    source: PathBuf,
    cache_dir: PathBuf,
    entry_id: String,
) -> Result<PathBuf, String> {
    // Spawn blocking because decoding and resizing are CPU-bound
    tokio::task::spawn_blocking(move || generate_thumbnail(&source, &cache_dir, &entry_id))
        .await
        .map_err(AssetError::from)
        .and_then(|result| result)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_sample(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([28, 169, 201]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_thumbnail_fits_bounding_square() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_sample(dir.path(), "wide.png", 1024, 512);
        let cache = dir.path().join("cache");

        let thumb = generate_thumbnail(&source, &cache, "p1").unwrap();
        let (width, height) = image::image_dimensions(&thumb).unwrap();

        assert_eq!(thumb, cache.join("p1.png"));
        assert_eq!((width, height), (256, 128));
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate_thumbnail(&dir.path().join("nope.jpg"), dir.path(), "p1");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_undecodable_source_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.jpg");
        fs::write(&source, b"not an image").unwrap();

        let result = generate_thumbnail(&source, dir.path(), "p1");
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_cached_thumbnail_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_sample(dir.path(), "a.png", 300, 300);
        let cache = dir.path().join("cache");

        let first = generate_thumbnail(&source, &cache, "p1").unwrap();
        let stamp = fs::metadata(&first).unwrap().modified().unwrap();
        let second = generate_thumbnail(&source, &cache, "p1").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::metadata(&second).unwrap().modified().unwrap(), stamp);
    }

    #[test]
    fn test_thumbnail_path_sanitizes_ids() {
        let cache = Path::new("/cache");
        assert_eq!(thumbnail_path(cache, "../p1"), cache.join("___p1.png"));
        assert_eq!(thumbnail_path(cache, "case-study_2"), cache.join("case-study_2.png"));
    }
}
