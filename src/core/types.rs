// スキャン処理に関連するデータ型定義

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// デコード済みの画像サイズ情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// 幅 / 高さ（実数除算）
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// サイズ読み取りに失敗したファイルの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub path: PathBuf,
    pub cause: String,
}

impl DecodeFailure {
    pub fn new(path: impl Into<PathBuf>, cause: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }
}

/// 個別ファイルの評価結果
#[derive(Debug, Clone, PartialEq)]
pub enum FileEvaluation {
    Conforming(ImageDescriptor),
    NonConforming(ImageDescriptor),
    Failed(DecodeFailure),
}

impl FileEvaluation {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Conforming(descriptor) | Self::NonConforming(descriptor) => &descriptor.path,
            Self::Failed(failure) => &failure.path,
        }
    }
}

/// スキャン結果
///
/// 非準拠ファイルは発見順に保持する。デコード失敗は別リストに保持し、
/// 非準拠リストには決して混ぜない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    non_conforming: Vec<PathBuf>,
    failures: Vec<DecodeFailure>,
    conforming: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 評価結果を1件追記
    pub fn record(&mut self, evaluation: FileEvaluation) {
        match evaluation {
            FileEvaluation::Conforming(_) => self.conforming += 1,
            FileEvaluation::NonConforming(descriptor) => self.non_conforming.push(descriptor.path),
            FileEvaluation::Failed(failure) => self.failures.push(failure),
        }
    }

    pub fn push_non_conforming(&mut self, path: PathBuf) {
        self.non_conforming.push(path);
    }

    /// 非準拠ファイルのパス（発見順）
    pub fn non_conforming(&self) -> &[PathBuf] {
        &self.non_conforming
    }

    pub fn failures(&self) -> &[DecodeFailure] {
        &self.failures
    }

    pub fn conforming_count(&self) -> usize {
        self.conforming
    }

    pub fn non_conforming_count(&self) -> usize {
        self.non_conforming.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// 評価した（発見された）ファイルの総数
    pub fn total_discovered(&self) -> usize {
        self.conforming + self.non_conforming.len() + self.failures.len()
    }

    /// 出力ファイル用の行（UTF-8文字列）
    pub fn to_lines(&self) -> Vec<String> {
        self.non_conforming
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    }
}

/// スキャン全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    pub started_at: DateTime<Utc>,
    pub total_discovered: usize,
    pub conforming: usize,
    pub non_conforming: usize,
    pub failed: usize,
    pub elapsed_ms: u64,
}

impl ScanSummary {
    pub fn from_result(result: &ScanResult, started_at: DateTime<Utc>, elapsed_ms: u64) -> Self {
        Self {
            started_at,
            total_discovered: result.total_discovered(),
            conforming: result.conforming_count(),
            non_conforming: result.non_conforming_count(),
            failed: result.failed_count(),
            elapsed_ms,
        }
    }
}
