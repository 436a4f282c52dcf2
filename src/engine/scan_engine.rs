// ScanEngine - 依存性注入による監査エンジン
// 発見・評価・出力の各協調者はコンストラクタで注入される

use super::{
    discovery::{discover_files, FileFilter},
    pipeline::ScanPipeline,
};
use crate::{
    core::{
        AuditError, AuditResult, ProcessingConfig, ProgressReporter, ResultWriter, ScanResult,
        ScanSummary,
    },
    image_loader::DimensionReader,
    services::ScanConfiguration,
    storage::FileWalker,
};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// 1回の監査実行の結果
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub result: ScanResult,
    pub summary: ScanSummary,
    pub output_path: PathBuf,
}

/// アスペクト比監査エンジン
///
/// 並列処理で共有される依存関係はArcで保持する。
pub struct ScanEngine<W, D, O, R> {
    walker: Arc<W>,
    reader: Arc<D>,
    writer: Arc<O>,
    reporter: Arc<R>,
}

impl<W, D, O, R> ScanEngine<W, D, O, R>
where
    W: FileWalker + 'static,
    D: DimensionReader + 'static,
    O: ResultWriter + 'static,
    R: ProgressReporter + 'static,
{
    pub fn new(walker: W, reader: D, writer: O, reporter: R) -> Self {
        Self {
            walker: Arc::new(walker),
            reader: Arc::new(reader),
            writer: Arc::new(writer),
            reporter: Arc::new(reporter),
        }
    }

    /// 検証・発見・評価まで実行し、出力は行わない
    pub async fn scan(&self, config: ScanConfiguration) -> AuditResult<ScanResult> {
        let config = config.into_validated()?;
        self.scan_validated(&config).await
    }

    /// 検証・発見・評価・出力までの一連の処理
    ///
    /// 設定エラーはスキャン開始前に返す。一致ファイルが0件でも空の出力ファイルを書く。
    pub async fn run(&self, config: ScanConfiguration) -> AuditResult<ScanReport> {
        let config = config.into_validated()?;

        let started_at = Utc::now();
        let timer = Instant::now();

        let result = self.scan_validated(&config).await?;
        let result = self.write_result(config.output_path(), result).await?;

        let summary =
            ScanSummary::from_result(&result, started_at, timer.elapsed().as_millis() as u64);

        tracing::info!(
            output = %config.output_path().display(),
            elapsed_ms = summary.elapsed_ms,
            "scan report written"
        );

        Ok(ScanReport {
            result,
            summary,
            output_path: config.output_path().to_path_buf(),
        })
    }

    /// 結果を出力先へ書き込む
    ///
    /// 失敗時は結果を `AuditError::OutputWrite` に保持して返すため再試行できる。
    pub async fn write_result(
        &self,
        destination: &Path,
        result: ScanResult,
    ) -> AuditResult<ScanResult> {
        let lines = result.to_lines();

        match self.writer.write_lines(destination, &lines).await {
            Ok(()) => Ok(result),
            Err(source) => Err(AuditError::output_write(destination, source, result)),
        }
    }

    async fn scan_validated(&self, config: &ScanConfiguration) -> AuditResult<ScanResult> {
        let policy = config.policy()?;
        let filter = FileFilter::new(config.extension(), config.name_pattern());

        let files = discover_files(self.walker.as_ref(), config.root_directory(), &filter)?;
        let total_files = files.len();

        tracing::info!(
            root = %config.root_directory().display(),
            files = total_files,
            workers = config.max_concurrent_tasks(),
            "starting scan"
        );

        self.reporter.report_started(total_files).await;

        if files.is_empty() {
            self.reporter.report_completed(0, 0).await;
            return Ok(ScanResult::new());
        }

        let pipeline = ScanPipeline::new(Arc::clone(&self.reader));
        let result = if config.max_concurrent_tasks() > 1 {
            pipeline
                .execute_parallel(files, &policy, config, Arc::clone(&self.reporter))
                .await
                .map_err(|e| AuditError::parallel_execution(format!("{e:#}")))?
        } else {
            pipeline
                .execute_sequential(
                    files,
                    &policy,
                    self.reporter.as_ref(),
                    config.enable_progress_reporting(),
                )
                .await
        };

        self.reporter
            .report_completed(result.non_conforming_count(), result.failed_count())
            .await;

        tracing::info!(
            discovered = result.total_discovered(),
            non_conforming = result.non_conforming_count(),
            failed = result.failed_count(),
            "scan finished"
        );

        Ok(result)
    }

    /// サイズ読み取り協調者への参照を取得
    pub fn reader(&self) -> &D {
        &self.reader
    }

    /// 出力協調者への参照を取得
    pub fn writer(&self) -> &O {
        &self.writer
    }
}
