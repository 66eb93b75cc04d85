use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::warn;

use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation to apply so an image displays upright.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Orientation {
    Normal,      // 1 = Top-left
    Rotate180,   // 3 = Bottom-right
    Rotate90Cw,  // 6 = Top-right
    Rotate90Ccw, // 8 = Bottom-left
}

impl Orientation {
    /// Maps an EXIF orientation tag. Mirrored variants are shown unrotated.
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files of `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(Error::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Reads the EXIF orientation of a JPEG. Other formats, and JPEGs without
/// readable EXIF data, come back as `Normal`.
pub fn read_orientation(path: &Path, bytes: &[u8]) -> Orientation {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return Orientation::Normal;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => Orientation::from_exif(values[0]),
            _ => Orientation::Normal,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            Orientation::Normal
        }
    }
}
