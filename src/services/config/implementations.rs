// 設定管理の具象実装

use crate::core::{AuditError, AuditResult, ProcessingConfig, RatioPolicy};
use crate::core::ratio::{DEFAULT_TARGET_RATIO, DEFAULT_TOLERANCE_PERCENT};
use std::path::{Path, PathBuf};

/// デフォルトの対象拡張子
pub const DEFAULT_EXTENSION: &str = "jpg";

/// デフォルトの出力ファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "non_conforming.txt";

/// 1回のスキャンの設定
///
/// スキャン中は不変。`into_validated` を通してから使用する。
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfiguration {
    root_directory: PathBuf,
    name_pattern: String,
    extension: String,
    target_ratio: f64,
    tolerance_percent: f64,
    output_path: PathBuf,
    max_concurrent: usize,
    buffer_size: usize,
    enable_progress: bool,
}

impl ScanConfiguration {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            name_pattern: String::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            target_ratio: DEFAULT_TARGET_RATIO,
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            max_concurrent: 1,
            buffer_size: 100,
            enable_progress: true,
        }
    }

    pub fn with_name_pattern(mut self, name_pattern: impl Into<String>) -> Self {
        self.name_pattern = name_pattern.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_target_ratio(mut self, target_ratio: f64) -> Self {
        self.target_ratio = target_ratio;
        self
    }

    pub fn with_tolerance_percent(mut self, tolerance_percent: f64) -> Self {
        self.tolerance_percent = tolerance_percent;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// CPU数に応じた並列度を設定
    pub fn with_parallelism_from_cpus(self) -> Self {
        self.with_max_concurrent(num_cpus::get().max(1) * 2)
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn name_pattern(&self) -> &str {
        &self.name_pattern
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn target_ratio(&self) -> f64 {
        self.target_ratio
    }

    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 判定ポリシーを取得
    pub fn policy(&self) -> AuditResult<RatioPolicy> {
        RatioPolicy::new(self.target_ratio, self.tolerance_percent)
    }

    /// 設定を検証し、ルートディレクトリを絶対パスに正規化する
    ///
    /// スキャン開始前に呼ぶこと。ここでのエラーは全て致命的。
    pub fn into_validated(mut self) -> AuditResult<Self> {
        if !self.root_directory.exists() {
            return Err(AuditError::invalid_root(&self.root_directory, "存在しません"));
        }

        if !self.root_directory.is_dir() {
            return Err(AuditError::invalid_root(
                &self.root_directory,
                "ディレクトリではありません",
            ));
        }

        self.root_directory = self
            .root_directory
            .canonicalize()
            .map_err(|e| AuditError::invalid_root(&self.root_directory, e.to_string()))?;

        std::fs::read_dir(&self.root_directory).map_err(|e| {
            AuditError::invalid_root(&self.root_directory, format!("読み取れません: {e}"))
        })?;

        self.policy()?;

        let extension = self.extension.trim().trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return Err(AuditError::configuration("拡張子が空です"));
        }
        self.extension = extension;

        if self.output_path.as_os_str().is_empty() {
            return Err(AuditError::configuration("出力ファイルのパスが空です"));
        }

        if self.max_concurrent == 0 {
            return Err(AuditError::configuration(
                "並列タスク数は1以上である必要があります",
            ));
        }

        if self.buffer_size == 0 {
            return Err(AuditError::configuration(
                "バッファサイズは1以上である必要があります",
            ));
        }

        Ok(self)
    }
}

impl ProcessingConfig for ScanConfiguration {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_scan_configuration() {
        let config = ScanConfiguration::new("/media");

        assert_eq!(config.root_directory(), Path::new("/media"));
        assert_eq!(config.name_pattern(), "");
        assert_eq!(config.extension(), "jpg");
        assert!((config.target_ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert!((config.tolerance_percent() - 2.0).abs() < 1e-12);
        assert_eq!(config.output_path(), Path::new(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.max_concurrent_tasks(), 1);
        assert_eq!(config.channel_buffer_size(), 100);
        assert!(config.enable_progress_reporting());
    }

    #[test]
    fn test_scan_configuration_builder() {
        let config = ScanConfiguration::new("/media")
            .with_name_pattern("fanart")
            .with_extension("PNG")
            .with_target_ratio(1.5)
            .with_tolerance_percent(5.0)
            .with_output_path("/tmp/out.txt")
            .with_max_concurrent(8)
            .with_buffer_size(16)
            .with_progress_reporting(false);

        assert_eq!(config.name_pattern(), "fanart");
        assert_eq!(config.extension(), "PNG");
        assert!((config.target_ratio() - 1.5).abs() < 1e-12);
        assert!((config.tolerance_percent() - 5.0).abs() < 1e-12);
        assert_eq!(config.output_path(), Path::new("/tmp/out.txt"));
        assert_eq!(config.max_concurrent_tasks(), 8);
        assert_eq!(config.channel_buffer_size(), 16);
        assert!(!config.enable_progress_reporting());
    }

    #[test]
    fn test_parallelism_from_cpus() {
        let config = ScanConfiguration::new("/media").with_parallelism_from_cpus();
        assert_eq!(config.max_concurrent_tasks(), num_cpus::get().max(1) * 2);
    }

    #[test]
    fn test_validate_canonicalizes_root_and_normalizes_extension() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("posters");
        std::fs::create_dir(&nested).unwrap();

        let config = ScanConfiguration::new(nested.join("..").join("posters"))
            .with_extension(".JPG")
            .into_validated()
            .unwrap();

        assert!(config.root_directory().is_absolute());
        assert_eq!(config.root_directory(), nested.canonicalize().unwrap());
        assert_eq!(config.extension(), "jpg");
    }

    #[test]
    fn test_validate_missing_root() {
        let error = ScanConfiguration::new("/nonexistent/media/library")
            .into_validated()
            .unwrap_err();

        assert!(matches!(error, AuditError::InvalidRootDirectory { .. }));
        assert!(error.to_string().contains("/nonexistent/media/library"));
    }

    #[test]
    fn test_validate_root_is_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("poster.jpg");
        std::fs::write(&file, b"dummy").unwrap();

        let error = ScanConfiguration::new(&file).into_validated().unwrap_err();
        assert!(matches!(error, AuditError::InvalidRootDirectory { .. }));
        assert!(error.to_string().contains("ディレクトリではありません"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_unlistable_root() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let locked = temp_dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // rootユーザーは権限に関係なく読めるため検証できない
        let listable = std::fs::read_dir(&locked).is_ok();
        let outcome = ScanConfiguration::new(&locked).into_validated();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        if listable {
            assert!(outcome.is_ok());
        } else {
            let error = outcome.unwrap_err();
            assert!(matches!(error, AuditError::InvalidRootDirectory { .. }));
            assert!(error.to_string().contains("読み取れません"));
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        let cases = [
            ScanConfiguration::new(root).with_target_ratio(0.0),
            ScanConfiguration::new(root).with_tolerance_percent(-1.0),
            ScanConfiguration::new(root).with_extension("  "),
            ScanConfiguration::new(root).with_output_path(""),
            ScanConfiguration::new(root).with_max_concurrent(0),
            ScanConfiguration::new(root).with_buffer_size(0),
        ];

        for config in cases {
            let error = config.clone().into_validated().unwrap_err();
            assert!(
                matches!(error, AuditError::Configuration { .. }),
                "expected configuration error for {config:?}"
            );
        }
    }
}
