// Collector - 並列処理結果の収集

use crate::core::{FileEvaluation, ProgressReporter, ScanResult};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 発見順のインデックス付き評価結果
pub type IndexedEvaluation = (usize, FileEvaluation);

/// Collector: 結果を収集し、発見順に並べ直してScanResultを構築
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<IndexedEvaluation>,
    total_files: usize,
    reporter: Arc<R>,
    report_progress: bool,
) -> tokio::task::JoinHandle<ScanResult>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut received = Vec::with_capacity(total_files);

        while let Some((index, evaluation)) = result_rx.recv().await {
            if let FileEvaluation::Failed(failure) = &evaluation {
                reporter.report_failure(&failure.path, &failure.cause).await;
            }
            received.push((index, evaluation));

            if report_progress {
                reporter.report_progress(received.len(), total_files).await;
            }
        }

        // 完了順はワーカー次第なので発見順に戻す
        received.sort_by_key(|(index, _)| *index);

        let mut result = ScanResult::new();
        for (_, evaluation) in received {
            result.record(evaluation);
        }
        result
    })
}
