use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

// --- Helper: Load and Sort Scene Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_scene_image(&path) {
            paths.push(path);
        }
    }
    // Scene order is file name order
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

fn is_scene_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flipped variants are left alone
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "loaded scene image");

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_images_in_name_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        for name in ["b.png", "a.JPG", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"").expect("write file");
        }

        let paths = load_sorted_image_paths(dir.path()).expect("paths");
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }
}
