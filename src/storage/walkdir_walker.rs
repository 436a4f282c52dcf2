use super::{FileWalker, WalkError, WalkIter};
use std::path::Path;
use walkdir::WalkDir;

/// walkdirによるローカルファイルシステム走査
#[derive(Debug, Clone, Default)]
pub struct WalkDirFileWalker {
    follow_links: bool,
}

impl WalkDirFileWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// シンボリックリンクを辿る走査
    pub fn following_links() -> Self {
        Self { follow_links: true }
    }
}

impl FileWalker for WalkDirFileWalker {
    fn walk(&self, root: &Path) -> WalkIter {
        let root = root.to_path_buf();
        let iter = WalkDir::new(&root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(error) => {
                    let location = error.path().unwrap_or(root.as_path()).to_path_buf();
                    let depth = error.depth();
                    let walk_error = WalkError::new(location, depth, anyhow::Error::new(error));
                    Some(Err(anyhow::Error::new(walk_error)))
                }
            });

        Box::new(iter)
    }
}
