// Consumer - 並列ワーカー機能

use super::producer::WorkItem;
use crate::{
    core::RatioPolicy, image_loader::DimensionReader,
    services::{persistence::collector::IndexedEvaluation, processing::evaluate_file},
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, Semaphore};

/// 単一Consumerワーカー
pub fn spawn_single_consumer<D>(
    worker_id: usize,
    reader: Arc<D>,
    policy: RatioPolicy,
    work_rx: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
    result_tx: mpsc::Sender<IndexedEvaluation>,
    semaphore: Arc<Semaphore>,
) -> tokio::task::JoinHandle<Result<()>>
where
    D: DimensionReader + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let (index, file_path) = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(item) => item,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| anyhow::anyhow!("Semaphore error: {}", e))?;

            tracing::trace!(worker_id, path = %file_path.display(), "worker picked file");
            let evaluation = evaluate_file(reader.as_ref(), &policy, &file_path).await;

            if (result_tx.send((index, evaluation)).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// Consumers: 並列ワーカープール
pub fn spawn_consumers<D>(
    reader: Arc<D>,
    policy: RatioPolicy,
    work_rx: mpsc::Receiver<WorkItem>,
    result_tx: mpsc::Sender<IndexedEvaluation>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    D: DimensionReader + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&reader),
                policy,
                Arc::clone(&work_rx),
                result_tx.clone(),
                Arc::clone(&semaphore),
            )
        })
        .collect()
}
