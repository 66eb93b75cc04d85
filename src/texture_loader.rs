use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use tracing::{debug, warn};

use showcase::Page;
use showcase::gallery::{Orientation, read_orientation};

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let orientation = read_orientation(image_path, &file_bytes);

    // Provide extension hint for loading from memory
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Normal => {}
    }
    debug!(path = %image_path.display(), ?orientation, "decoded image");

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}

/// Loads a texture for every image slide on the page. Images that fail to load
/// are skipped; their slides fall back to a text card.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    page: &Page,
) -> HashMap<PathBuf, Texture2D> {
    let mut textures = HashMap::new();
    let paths = page
        .carousels()
        .iter()
        .flat_map(|c| c.carousel.slides())
        .filter_map(|s| s.image.clone());

    for path in paths {
        if textures.contains_key(&path) {
            continue;
        }
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                textures.insert(path, texture);
            }
            Err(e) => warn!("skipping image: {:#}", e),
        }
    }
    textures
}
