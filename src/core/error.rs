// アスペクト比監査のカスタムエラー型定義
// 致命的エラー（設定・出力）と回復可能エラー（画像デコード）を区別する

use super::types::ScanResult;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 画像サイズ読み取りの失敗
///
/// 1ファイル単位の回復可能なエラー。スキャン全体を中断しない。
#[derive(Error, Debug)]
#[error("画像デコードエラー: {}", path.display())]
pub struct DecodeError {
    pub path: PathBuf,
    #[source]
    pub source: anyhow::Error,
}

impl DecodeError {
    /// 新しいデコードエラーを作成
    pub fn new(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// 原因メッセージを取得（ソースチェーンを含む）
    pub fn cause_message(&self) -> String {
        format!("{:#}", self.source)
    }
}

/// 監査処理のエラー型
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("ルートディレクトリエラー: {} - {reason}", path.display())]
    InvalidRootDirectory { path: PathBuf, reason: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("出力書き込みエラー: {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
        /// 書き込めなかったスキャン結果（再試行用に保持）
        pending: Box<ScanResult>,
    },

    #[error("並列処理エラー: {message}")]
    ParallelExecution { message: String },
}

impl AuditError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// ルートディレクトリエラーの作成
    pub fn invalid_root(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidRootDirectory {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// 出力書き込みエラーの作成
    pub fn output_write(path: impl AsRef<Path>, source: anyhow::Error, pending: ScanResult) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
            pending: Box::new(pending),
        }
    }

    /// 並列処理エラーの作成
    pub fn parallel_execution(message: impl Into<String>) -> Self {
        Self::ParallelExecution {
            message: message.into(),
        }
    }

    /// エラーが回復可能かどうかを判定
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Configuration { .. } | Self::InvalidRootDirectory { .. } => false,
            Self::Decode(_) => true,
            Self::OutputWrite { .. } | Self::ParallelExecution { .. } => false,
        }
    }

    /// 書き込みに失敗したスキャン結果を参照
    pub fn pending_result(&self) -> Option<&ScanResult> {
        match self {
            Self::OutputWrite { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// 書き込みに失敗したスキャン結果を取り出す
    pub fn into_pending_result(self) -> Option<ScanResult> {
        match self {
            Self::OutputWrite { pending, .. } => Some(*pending),
            _ => None,
        }
    }

    /// エラー解決のための提案
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Configuration { .. } => Some("引数または設定ファイルの値を確認してください"),
            Self::InvalidRootDirectory { .. } => {
                Some("ディレクトリのパスとアクセス権限を確認してください")
            }
            Self::Decode(_) => Some("画像ファイルの形式と整合性を確認してください"),
            Self::OutputWrite { .. } => {
                Some("出力先のディレクトリと書き込み権限を確認してください")
            }
            Self::ParallelExecution { .. } => Some("--threads 1 で逐次実行を試してください"),
        }
    }
}

/// 監査処理の結果型
pub type AuditResult<T> = std::result::Result<T, AuditError>;
