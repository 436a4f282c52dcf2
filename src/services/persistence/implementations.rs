// 結果出力の具象実装

use crate::core::ResultWriter;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// テキストファイルへ1行1パスで書き込む実装
#[derive(Debug, Clone, Default)]
pub struct LineFileWriter;

impl LineFileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultWriter for LineFileWriter {
    async fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()> {
        let file = File::create(destination)
            .await
            .with_context(|| format!("Failed to create output file: {}", destination.display()))?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        writer
            .flush()
            .await
            .with_context(|| format!("Failed to flush output file: {}", destination.display()))?;

        Ok(())
    }
}

/// メモリ内保存の出力実装（テスト用および組み込み用）
#[derive(Debug, Clone, Default)]
pub struct MemoryResultWriter {
    files: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
    write_count: Arc<Mutex<usize>>,
}

impl MemoryResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込まれた行を取得
    pub fn get_written(&self, destination: &Path) -> Option<Vec<String>> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(destination)
            .cloned()
    }

    /// 書き込み回数を取得
    pub fn write_count(&self) -> usize {
        *self.write_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ResultWriter for MemoryResultWriter {
    async fn write_lines(&self, destination: &Path, lines: &[String]) -> Result<()> {
        self.files
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory writer lock poisoned"))?
            .insert(destination.to_path_buf(), lines.to_vec());
        *self
            .write_count
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory writer lock poisoned"))? += 1;
        Ok(())
    }
}
