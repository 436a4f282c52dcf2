use super::DimensionReader;
use crate::core::DecodeError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::ImageReader;
use std::path::Path;

/// 画像ヘッダーのみを読み取るサイズリーダー
///
/// フォーマットは拡張子ではなくファイル内容から推定する。
#[derive(Clone, Debug, Default)]
pub struct HeaderDimensionReader;

impl HeaderDimensionReader {
    pub fn new() -> Self {
        Self
    }

    fn read_header(path: &Path) -> Result<(u32, u32)> {
        let (width, height) = ImageReader::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to detect image format: {}", path.display()))?
            .into_dimensions()
            .with_context(|| format!("Failed to read image header: {}", path.display()))?;

        if width == 0 || height == 0 {
            anyhow::bail!("Image has zero dimension: {width}x{height}");
        }

        Ok((width, height))
    }
}

#[async_trait]
impl DimensionReader for HeaderDimensionReader {
    async fn read_dimensions(&self, path: &Path) -> Result<(u32, u32), DecodeError> {
        let owned_path = path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::read_header(&owned_path))
            .await
            .context("Failed to spawn blocking task for header reading")
            .and_then(|result| result)
            .map_err(|error| DecodeError::new(path, error))
    }

    fn strategy_name(&self) -> &'static str {
        "Header only"
    }
}
