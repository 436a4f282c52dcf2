// Discovery - 対象ファイルの発見と絞り込み

use crate::core::{AuditError, AuditResult};
use crate::storage::{FileWalker, WalkError};
use std::path::{Path, PathBuf};

/// 拡張子とファイル名による絞り込み
///
/// どちらも大文字小文字を区別しない。名前パターンはファイル名の部分一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    extension: String,
    name_pattern: String,
}

impl FileFilter {
    pub fn new(extension: &str, name_pattern: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_lowercase(),
            name_pattern: name_pattern.to_lowercase(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let extension_matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase() == self.extension)
            .unwrap_or(false);

        if !extension_matches {
            return false;
        }

        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().contains(&self.name_pattern))
            .unwrap_or(false)
    }
}

/// ルート以下から条件に合うファイルを発見順に列挙
///
/// ルートディレクトリ自体が読めない場合は `InvalidRootDirectory` を返す。
/// サブディレクトリ以下の走査エラーは警告を出して読み飛ばす。
pub fn discover_files<W>(
    walker: &W,
    root: &Path,
    filter: &FileFilter,
) -> AuditResult<Vec<PathBuf>>
where
    W: FileWalker + ?Sized,
{
    let mut files = Vec::new();

    for entry in walker.walk(root) {
        match entry {
            Ok(path) if filter.matches(&path) => files.push(path),
            Ok(_) => {}
            Err(error) if is_root_failure(&error) => {
                return Err(AuditError::invalid_root(
                    root,
                    format!("読み取れません: {error:#}"),
                ));
            }
            Err(error) => {
                tracing::warn!(error = %format!("{error:#}"), "skipping unreadable entry");
            }
        }
    }

    Ok(files)
}

fn is_root_failure(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<WalkError>()
        .is_some_and(WalkError::is_root)
}
