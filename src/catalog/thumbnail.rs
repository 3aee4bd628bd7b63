//! Thumbnail locations and recompression
//!
//! PDF previews live in a `thumbnails/` directory next to the project they
//! belong to. Nested project roots (canopy sites, school frameworks) keep one
//! thumbnail directory per site rather than per framework.

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

pub const THUMBNAIL_DIR: &str = "thumbnails";

/// Thumbnails wider than this are downscaled
pub const MAX_THUMBNAIL_WIDTH: u32 = 400;

pub const JPEG_QUALITY: u8 = 65;

/// Top-level directories whose second level is the actual project
const NESTED_PROJECT_ROOTS: [&str; 3] = ["MFG - Projects", "Oxford LT", "Oxford XL"];

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Conventional thumbnail path for a PDF, relative to the media root.
pub fn thumbnail_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .unwrap_or_else(|| OsStr::new("thumbnail"))
        .to_string_lossy();
    let file_name = format!("{}.jpg", stem);

    let dirs: Vec<&OsStr> = source
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    match dirs.as_slice() {
        [] => Path::new(THUMBNAIL_DIR).join(file_name),
        [top, project, ..]
            if NESTED_PROJECT_ROOTS
                .iter()
                .any(|root| OsStr::new(root) == *top) =>
        {
            Path::new(top).join(project).join(THUMBNAIL_DIR).join(file_name)
        }
        [top, ..] => Path::new(top).join(THUMBNAIL_DIR).join(file_name),
    }
}

/// Totals from a recompression pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressionReport {
    pub files: usize,
    pub failed: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl CompressionReport {
    pub fn reduction_percent(&self) -> f64 {
        if self.bytes_before == 0 {
            return 0.0;
        }
        (self.bytes_before.saturating_sub(self.bytes_after)) as f64 / self.bytes_before as f64
            * 100.0
    }
}

fn is_thumbnail_file(path: &Path) -> bool {
    let in_thumbnail_dir = path
        .parent()
        .map(|p| p.to_string_lossy().contains(THUMBNAIL_DIR))
        .unwrap_or(false);
    let is_image = path
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);
    in_thumbnail_dir && is_image
}

/// Recompress every thumbnail under `root` in place: RGB, at most
/// [`MAX_THUMBNAIL_WIDTH`] wide, JPEG at [`JPEG_QUALITY`].
///
/// A file that fails to decode or encode is counted and left as it was.
pub fn compress_thumbnails(root: &Path) -> Result<CompressionReport> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let mut report = CompressionReport::default();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_thumbnail_file(path) {
            continue;
        }

        let before = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        report.bytes_before += before;

        match compress_one(path) {
            Ok(after) => {
                report.files += 1;
                report.bytes_after += after;
                tracing::debug!(
                    path = %path.display(),
                    before,
                    after,
                    "thumbnail recompressed"
                );
            }
            Err(err) => {
                report.failed += 1;
                report.bytes_after += before;
                tracing::warn!(path = %path.display(), error = %err, "thumbnail skipped");
            }
        }
    }

    Ok(report)
}

fn compress_one(path: &Path) -> Result<u64> {
    // Guess from content: a previous pass may have written JPEG bytes
    // under a .png name.
    let decoded = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    let resized = if rgb.width() > MAX_THUMBNAIL_WIDTH {
        let ratio = MAX_THUMBNAIL_WIDTH as f64 / rgb.width() as f64;
        let height = ((rgb.height() as f64 * ratio) as u32).max(1);
        rgb.resize_exact(MAX_THUMBNAIL_WIDTH, height, FilterType::Lanczos3)
    } else {
        rgb
    };

    let mut encoded = Vec::new();
    resized
        .write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY))
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    replace_file(path, &encoded)?;
    Ok(encoded.len() as u64)
}

/// Sibling file the new bytes are staged in before the rename
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or(OsStr::new("thumbnail")).to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Swap `path` for `bytes` through a rename so a failed write never
/// truncates the original.
fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = staging_path(path);
    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("Failed to write {}", tmp_path.display()));
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("Failed to replace {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_thumbnail_for_first_level_project() {
        assert_eq!(
            thumbnail_path_for(Path::new("Baumit/Group GA/BFY-GA-A2-01-0.pdf")),
            PathBuf::from("Baumit/thumbnails/BFY-GA-A2-01-0.jpg")
        );
        assert_eq!(
            thumbnail_path_for(Path::new("Uxbridge/Dining Hall.pdf")),
            PathBuf::from("Uxbridge/thumbnails/Dining Hall.jpg")
        );
    }

    #[test]
    fn test_thumbnail_for_nested_project() {
        assert_eq!(
            thumbnail_path_for(Path::new(
                "MFG - Projects/MFG - Stretford/MFG - Stretford - Layout GA-01 - Rev 2.pdf"
            )),
            PathBuf::from(
                "MFG - Projects/MFG - Stretford/thumbnails/MFG - Stretford - Layout GA-01 - Rev 2.jpg"
            )
        );
        assert_eq!(
            thumbnail_path_for(Path::new("Oxford XL/Lavington/Layout.pdf")),
            PathBuf::from("Oxford XL/Lavington/thumbnails/Layout.jpg")
        );
    }

    #[test]
    fn test_thumbnail_for_root_document() {
        assert_eq!(
            thumbnail_path_for(Path::new("Modern Professional CV Resume.pdf")),
            PathBuf::from("thumbnails/Modern Professional CV Resume.jpg")
        );
    }

    #[test]
    fn test_compress_downscales_only_thumbnail_dirs() {
        let root = tempfile::tempdir().unwrap();
        let thumbs = root.path().join("Baumit").join(THUMBNAIL_DIR);
        fs::create_dir_all(&thumbs).unwrap();

        let wide = thumbs.join("wide.jpg");
        RgbImage::from_pixel(800, 200, image::Rgb([200, 40, 40]))
            .save(&wide)
            .unwrap();
        let small = thumbs.join("small.png");
        RgbImage::from_pixel(120, 90, image::Rgb([10, 10, 10]))
            .save(&small)
            .unwrap();
        let outside = root.path().join("Baumit").join("render.jpg");
        RgbImage::from_pixel(800, 200, image::Rgb([0, 0, 0]))
            .save(&outside)
            .unwrap();
        fs::write(thumbs.join("notes.txt"), "not an image").unwrap();

        let report = compress_thumbnails(root.path()).unwrap();
        assert_eq!(report.files, 2);
        assert_eq!(report.failed, 0);

        let reopened = ImageReader::open(&wide)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!((reopened.width(), reopened.height()), (400, 100));

        let untouched = image::open(&outside).unwrap();
        assert_eq!(untouched.width(), 800);
    }

    #[test]
    fn test_compress_counts_undecodable_files() {
        let root = tempfile::tempdir().unwrap();
        let thumbs = root.path().join(THUMBNAIL_DIR);
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("broken.jpg"), b"definitely not a jpeg").unwrap();

        let report = compress_thumbnails(root.path()).unwrap();
        assert_eq!(report.files, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.bytes_before, report.bytes_after);
        assert_eq!(report.reduction_percent(), 0.0);
    }

    #[test]
    fn test_failed_write_keeps_original_bytes() {
        let root = tempfile::tempdir().unwrap();
        let thumbs = root.path().join(THUMBNAIL_DIR);
        fs::create_dir_all(&thumbs).unwrap();

        let wide = thumbs.join("wide.jpg");
        RgbImage::from_pixel(800, 200, image::Rgb([90, 90, 90]))
            .save(&wide)
            .unwrap();
        let original = fs::read(&wide).unwrap();
        // A directory in the staging spot makes the write fail after decoding
        fs::create_dir(staging_path(&wide)).unwrap();

        let report = compress_thumbnails(root.path()).unwrap();
        assert_eq!(report.files, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.bytes_after, report.bytes_before);
        assert_eq!(fs::read(&wide).unwrap(), original);
    }

    #[test]
    fn test_compress_rejects_missing_root() {
        let root = tempfile::tempdir().unwrap();
        assert!(compress_thumbnails(&root.path().join("nope")).is_err());
    }
}
