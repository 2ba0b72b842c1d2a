use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use menu_genius_common::SelectedImage;

use crate::model::PreviewImage;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "heic"];

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Image", IMAGE_EXTENSIONS)
        .pick_file()
}

pub fn read_image(path: &Path) -> Result<SelectedImage> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();
    let image = SelectedImage::new(file_name, bytes).with_context(|| format!("select {}", path.display()))?;
    Ok(image)
}

/// プレビュー用に縮小する。デコードできない形式なら None。
pub fn decode_preview(bytes: &[u8]) -> Option<PreviewImage> {
    let image = image::load_from_memory(bytes).ok()?;
    let thumb = image.thumbnail(480, 360);
    Some(PreviewImage {
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    })
}
