// Worker - 単一ファイル評価機能

use crate::core::{Classification, DecodeFailure, FileEvaluation, ImageDescriptor, RatioPolicy};
use crate::image_loader::DimensionReader;
use std::path::Path;

/// 単一ファイルの評価
///
/// サイズ読み取りに失敗した場合は `Failed` を返し、エラーを外へ伝播しない。
pub async fn evaluate_file<D>(reader: &D, policy: &RatioPolicy, path: &Path) -> FileEvaluation
where
    D: DimensionReader,
{
    let (width, height) = match reader.read_dimensions(path).await {
        Ok(dimensions) => dimensions,
        Err(error) => {
            tracing::debug!(path = %path.display(), error = %error, "failed to read dimensions");
            return FileEvaluation::Failed(DecodeFailure::new(path, error.cause_message()));
        }
    };

    // 0サイズは判定に渡さずデコード失敗として扱う
    if width == 0 || height == 0 {
        return FileEvaluation::Failed(DecodeFailure::new(
            path,
            format!("invalid dimensions {width}x{height}"),
        ));
    }

    let descriptor = ImageDescriptor::new(path, width, height);
    let classification = policy.classify(&descriptor);

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        ratio = descriptor.aspect_ratio(),
        ?classification,
        "evaluated image"
    );

    match classification {
        Classification::Conforming => FileEvaluation::Conforming(descriptor),
        Classification::NonConforming => FileEvaluation::NonConforming(descriptor),
    }
}
