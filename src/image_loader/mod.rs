use crate::core::DecodeError;
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

pub mod header;

/// 画像サイズ読み取りバックエンドのトレイト
///
/// ピクセルデータは扱わず、幅と高さだけを返す。
#[automock]
#[async_trait]
pub trait DimensionReader: Send + Sync {
    /// ファイルから (幅, 高さ) を読み取る
    async fn read_dimensions(&self, path: &Path) -> Result<(u32, u32), DecodeError>;

    /// 読み取り戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}

// DimensionReader for Box<dyn DimensionReader>
#[async_trait]
impl DimensionReader for Box<dyn DimensionReader> {
    async fn read_dimensions(&self, path: &Path) -> Result<(u32, u32), DecodeError> {
        self.as_ref().read_dimensions(path).await
    }

    fn strategy_name(&self) -> &'static str {
        self.as_ref().strategy_name()
    }
}
