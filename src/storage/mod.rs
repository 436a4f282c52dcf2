use anyhow::Result;
use mockall::automock;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod walkdir_walker;

/// 走査中に発生したエントリ単位のエラー
///
/// `depth` はルートからの深さ。0はルートディレクトリ自体の失敗を表す。
#[derive(Error, Debug)]
#[error("走査エラー: {}", path.display())]
pub struct WalkError {
    pub path: PathBuf,
    pub depth: usize,
    #[source]
    pub source: anyhow::Error,
}

impl WalkError {
    pub fn new(path: impl Into<PathBuf>, depth: usize, source: anyhow::Error) -> Self {
        Self {
            path: path.into(),
            depth,
            source,
        }
    }

    /// ルートディレクトリ自体が読めなかったかどうか
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// 走査結果のイテレータ（遅延評価）
pub type WalkIter = Box<dyn Iterator<Item = Result<PathBuf>> + Send>;

/// ファイルシステム走査のトレイト
///
/// ルート以下の全サブディレクトリを再帰的に走査し、ファイルのみを返す。
/// 拡張子や名前による絞り込みは呼び出し側で行う。
#[automock]
pub trait FileWalker: Send + Sync {
    /// ルート以下のファイルパスを列挙する
    fn walk(&self, root: &Path) -> WalkIter;
}

// FileWalker for Box<dyn FileWalker>
impl FileWalker for Box<dyn FileWalker> {
    fn walk(&self, root: &Path) -> WalkIter {
        self.as_ref().walk(root)
    }
}
