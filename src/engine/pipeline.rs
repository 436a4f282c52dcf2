// Pipeline - 逐次処理とProducer-Consumerパイプライン

use super::{
    consumer::spawn_consumers,
    producer::{spawn_producer, WorkItem},
};
use crate::{
    core::{FileEvaluation, ProcessingConfig, ProgressReporter, RatioPolicy, ScanResult},
    image_loader::DimensionReader,
    services::{
        persistence::{collector::IndexedEvaluation, spawn_result_collector},
        processing::evaluate_file,
    },
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// 発見済みファイルを評価してScanResultを組み立てるパイプライン
pub struct ScanPipeline<D> {
    reader: Arc<D>,
}

impl<D> ScanPipeline<D>
where
    D: DimensionReader + 'static,
{
    pub fn new(reader: Arc<D>) -> Self {
        Self { reader }
    }

    /// 発見順に1ファイルずつ評価
    pub async fn execute_sequential<R>(
        &self,
        files: Vec<PathBuf>,
        policy: &RatioPolicy,
        reporter: &R,
        report_progress: bool,
    ) -> ScanResult
    where
        R: ProgressReporter + ?Sized,
    {
        let total_files = files.len();
        let mut result = ScanResult::new();

        for (index, path) in files.iter().enumerate() {
            let evaluation = evaluate_file(self.reader.as_ref(), policy, path).await;

            if let FileEvaluation::Failed(failure) = &evaluation {
                reporter.report_failure(&failure.path, &failure.cause).await;
            }
            result.record(evaluation);

            if report_progress {
                reporter.report_progress(index + 1, total_files).await;
            }
        }

        result
    }

    /// 有界ワーカープールで並列に評価
    ///
    /// 完了順は不定だが、返すScanResultは発見順に並ぶ。
    pub async fn execute_parallel<C, R>(
        &self,
        files: Vec<PathBuf>,
        policy: &RatioPolicy,
        config: &C,
        reporter: Arc<R>,
    ) -> Result<ScanResult>
    where
        C: ProcessingConfig + ?Sized,
        R: ProgressReporter + 'static,
    {
        let total_files = files.len();
        let worker_count = config.max_concurrent_tasks().min(total_files).max(1);

        let (work_tx, work_rx) = mpsc::channel::<WorkItem>(config.channel_buffer_size());
        let (result_tx, result_rx) =
            mpsc::channel::<IndexedEvaluation>(config.channel_buffer_size());
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_tasks()));

        let producer_handle = spawn_producer(files, work_tx);

        let consumer_handles = spawn_consumers(
            Arc::clone(&self.reader),
            *policy,
            work_rx,
            result_tx,
            semaphore,
            worker_count,
        );

        let collector_handle = spawn_result_collector(
            result_rx,
            total_files,
            reporter,
            config.enable_progress_reporting(),
        );

        producer_handle.await.context("producer task failed")??;

        for handle in consumer_handles {
            handle.await.context("worker task failed")??;
        }

        // 全ワーカーのresult_txが閉じた時点でCollectorが終了する
        collector_handle.await.context("collector task failed")
    }
}
