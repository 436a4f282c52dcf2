// スキャンシステムのトレイト定義
// 設定・進捗報告・結果出力の抽象化インターフェース

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

/// 実行設定を抽象化するトレイト
#[automock]
pub trait ProcessingConfig: Send + Sync {
    /// 最大同時実行タスク数を取得（1なら逐次処理）
    fn max_concurrent_tasks(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// ProcessingConfig for Box<dyn ProcessingConfig>
impl ProcessingConfig for Box<dyn ProcessingConfig> {
    fn max_concurrent_tasks(&self) -> usize {
        self.as_ref().max_concurrent_tasks()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// デコード失敗時の報告
    async fn report_failure(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_non_conforming: usize, total_failed: usize);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_failure(&self, file_path: &Path, error: &str) {
        self.as_ref().report_failure(file_path, error).await
    }

    async fn report_completed(&self, total_non_conforming: usize, total_failed: usize) {
        self.as_ref()
            .report_completed(total_non_conforming, total_failed)
            .await
    }
}

/// 行単位の結果出力を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ResultWriter: Send + Sync {
    /// 出力先を上書きし、各行を改行区切り（UTF-8）で書き込む
    ///
    /// 行が0件でも空ファイルを作成すること。
    async fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()>;
}

// ResultWriter for Box<dyn ResultWriter>
#[async_trait]
impl ResultWriter for Box<dyn ResultWriter> {
    async fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()> {
        self.as_ref().write_lines(destination, lines).await
    }
}
