// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;
use std::path::Path;

/// 進捗行を出す間隔（ファイル数）の既定値
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// コンソール出力による進捗報告実装
///
/// 進捗と開始・完了はstdoutへ、読み取り失敗はquietでもstderrへ出す。
#[derive(Debug, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
    interval: usize,
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self {
            quiet: false,
            interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 進捗行を出す間隔を設定（0は1として扱う）
    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// 進捗行の文字列を作る。出力しない回は `None`
    fn progress_line(&self, completed: usize, total: usize) -> Option<String> {
        if total == 0 || (completed % self.interval != 0 && completed != total) {
            return None;
        }
        let percentage = completed as f64 / total as f64 * 100.0;
        Some(format!("📊 Checked {completed}/{total} ({percentage:.1}%)"))
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_files: usize) {
        if !self.quiet {
            println!("🚀 Checking {total_files} images...");
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if self.quiet {
            return;
        }
        if let Some(line) = self.progress_line(completed, total) {
            println!("{line}");
        }
    }

    async fn report_failure(&self, file_path: &Path, error: &str) {
        eprintln!("⚠️  Skipped {}: {error}", file_path.display());
    }

    async fn report_completed(&self, total_non_conforming: usize, total_failed: usize) {
        if !self.quiet {
            println!("✅ Done. Non-conforming: {total_non_conforming}, unreadable: {total_failed}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・組み込み用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_failure(&self, _file_path: &Path, _error: &str) {}

    async fn report_completed(&self, _total_non_conforming: usize, _total_failed: usize) {}
}
