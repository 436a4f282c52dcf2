// Producer - ファイル配信機能

use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// 発見順のインデックス付きファイルパス
pub type WorkItem = (usize, PathBuf);

/// Producer: ファイルパスを発見順のインデックス付きで配信
pub fn spawn_producer(
    files: Vec<PathBuf>,
    work_tx: mpsc::Sender<WorkItem>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for item in files.into_iter().enumerate() {
            if (work_tx.send(item).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
