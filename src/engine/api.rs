// 高レベル公開API
// 標準の協調者を組み込んだScanEngineを簡単に使用するための関数

use super::{ScanEngine, ScanReport};
use crate::{
    core::AuditResult,
    image_loader::header::HeaderDimensionReader,
    services::{ConsoleProgressReporter, LineFileWriter, ScanConfiguration},
    storage::walkdir_walker::WalkDirFileWalker,
};

/// 標準構成のエンジン型
pub type DefaultScanEngine =
    ScanEngine<WalkDirFileWalker, HeaderDimensionReader, LineFileWriter, ConsoleProgressReporter>;

/// 標準の協調者でScanEngineを作成
///
/// walkdirによる走査、ヘッダーのみのサイズ読み取り、ファイルへの行出力を使用する。
pub fn create_scan_engine(follow_links: bool, quiet: bool) -> DefaultScanEngine {
    let walker = if follow_links {
        WalkDirFileWalker::following_links()
    } else {
        WalkDirFileWalker::new()
    };
    let reporter = if quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    ScanEngine::new(
        walker,
        HeaderDimensionReader::new(),
        LineFileWriter::new(),
        reporter,
    )
}

/// 標準構成のScanEngineを作成
pub fn create_default_scan_engine() -> DefaultScanEngine {
    create_scan_engine(false, false)
}

/// 進捗表示を抑えた標準構成のScanEngineを作成
pub fn create_quiet_scan_engine() -> DefaultScanEngine {
    create_scan_engine(false, true)
}

/// 標準構成でディレクトリを監査し、結果ファイルを書き出す
pub async fn audit_directory(config: ScanConfiguration) -> AuditResult<ScanReport> {
    create_quiet_scan_engine().run(config).await
}
