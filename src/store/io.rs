//! loading and saving images on disk

use std::{
    fs::{self, DirEntry},
    io,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{
    error::{Error, Result},
    store::Image,
};

/// extensions recognized when scanning a directory, compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// decodes the file at `path` into an RGB image. alpha channels are dropped.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    log::info!("Loading {:?}", path);

    let image = image::open(path)?;
    Ok(Image::from(&image.to_rgb8()))
}

/// lists the image files directly inside `dir`, sorted by path so that repeated scans of the
/// same directory always yield the same order.
pub fn image_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let files = fs::read_dir(dir)?
        .filter_map(entry_path)
        .filter(|path| path.is_file() && has_image_extension(path))
        .sorted()
        .collect();

    Ok(files)
}

/// loads every image in `dir`, in the order given by [`image_files`].
pub fn load_images(dir: impl AsRef<Path>) -> Result<Vec<Image>> {
    let dir = dir.as_ref();
    let files = image_files(dir)?;

    if files.is_empty() {
        return Err(Error::InvalidInput(format!(
            "No image files found in {:?}",
            dir
        )));
    }

    log::info!("Found {} image files.", files.len());

    files.iter().map(load_image).collect()
}

/// encodes `image` in the format implied by the extension of `path`
pub fn save_image(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image.to_rgb8().save(path)?;
    log::info!("Saved image to {:?}", path);
    Ok(())
}

fn entry_path(entry: io::Result<DirEntry>) -> Option<PathBuf> {
    match entry {
        Ok(entry) => Some(entry.path()),
        Err(e) => {
            log::warn!("Skipping unreadable directory entry: {}", e);
            None
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}
