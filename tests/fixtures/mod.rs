// テスト用の画像ファイル生成ヘルパー
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 指定サイズの黒いJPEGを書き込む
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::new(width, height).save(path).unwrap();
}

/// 拡張子だけがJPEGの壊れたファイルを書き込む
pub fn write_corrupt(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"this is not a jpeg").unwrap();
}

/// メディアライブラリを模したディレクトリ構成
pub struct MediaLibrary {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub conforming: PathBuf,
    pub non_conforming: PathBuf,
    pub corrupt: PathBuf,
}

impl MediaLibrary {
    /// 適合・不適合・破損のfanartを1つずつ持つライブラリ
    ///
    /// 名前や拡張子で除外されるファイルも含む。
    pub fn mixed() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("library");

        let conforming = root.join("Movie A").join("fanart.jpg");
        let non_conforming = root.join("Movie B").join("FanArt.JPG");
        let corrupt = root.join("Movie C").join("movie-fanart.jpg");

        write_jpeg(&conforming, 320, 180);
        write_jpeg(&non_conforming, 320, 240);
        write_corrupt(&corrupt);

        // 名前が一致しない
        write_jpeg(&root.join("Movie B").join("poster.jpg"), 200, 300);
        // 拡張子が一致しない
        fs::write(root.join("Movie A").join("fanart.png"), b"png").unwrap();

        Self {
            temp_dir,
            root: root.canonicalize().unwrap(),
            conforming,
            non_conforming,
            corrupt,
        }
    }

    /// 空のライブラリ
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("library");
        fs::create_dir_all(&root).unwrap();

        Self {
            root: root.canonicalize().unwrap(),
            conforming: PathBuf::new(),
            non_conforming: PathBuf::new(),
            corrupt: PathBuf::new(),
            temp_dir,
        }
    }

    /// 多数のfanartを持つライブラリ（偶数番目が不適合）
    pub fn many(count: usize) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("library");

        for i in 0..count {
            let path = root.join(format!("Show {:02}", i / 5)).join(format!("ep{i:03}-fanart.jpg"));
            if i % 7 == 6 {
                write_corrupt(&path);
            } else if i % 2 == 0 {
                write_jpeg(&path, 64, 48);
            } else {
                write_jpeg(&path, 64, 36);
            }
        }

        Self {
            root: root.canonicalize().unwrap(),
            conforming: PathBuf::new(),
            non_conforming: PathBuf::new(),
            corrupt: PathBuf::new(),
            temp_dir,
        }
    }

    /// 出力ファイルのパス（ライブラリの外）
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// 出力ファイルを行ごとに読む
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
