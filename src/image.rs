use crate::error::{Result, WasteSortError};
use std::path::Path;
use waste_sort_common::types::mime_from_extension;
use waste_sort_common::UploadedImage;

/// 画像ファイルを読み込む（拡張子でMIMEタイプを判定）
pub fn load_image(path: &Path) -> Result<UploadedImage> {
    if !path.is_file() {
        return Err(WasteSortError::FileNotFound(path.display().to_string()));
    }

    let mime_type = path
        .extension()
        .and_then(|ext| mime_from_extension(&ext.to_string_lossy()))
        .ok_or_else(|| WasteSortError::UnsupportedImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let bytes = std::fs::read(path)?;
    Ok(UploadedImage::new(file_name, mime_type, bytes)?)
}
