// JSON設定ファイル
//
// 全ての項目は省略可能。コマンドライン引数で明示された値が優先される。

use super::implementations::ScanConfiguration;
use crate::core::{parse_ratio, AuditError, AuditResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 目標比率の表記（数値または `"16:9"` 形式の文字列）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatioValue {
    Number(f64),
    Text(String),
}

impl RatioValue {
    pub fn to_ratio(&self) -> AuditResult<f64> {
        match self {
            Self::Number(value) => parse_ratio(&value.to_string()),
            Self::Text(text) => parse_ratio(text),
        }
    }
}

/// 設定ファイルの内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfigFile {
    pub name_pattern: Option<String>,
    pub extension: Option<String>,
    pub target_ratio: Option<RatioValue>,
    pub tolerance_percent: Option<f64>,
    pub output: Option<PathBuf>,
    pub threads: Option<usize>,
}

impl ScanConfigFile {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> AuditResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AuditError::configuration(format!("設定ファイルの解析エラー: {e}")))
    }

    /// ファイルから読み込み
    pub fn load(path: &Path) -> AuditResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AuditError::configuration(format!(
                "設定ファイルを読み込めません: {} - {e}",
                path.display()
            ))
        })?;

        Self::from_json(&content)
    }

    /// 指定された値でスキャン設定を上書き
    pub fn apply(&self, mut config: ScanConfiguration) -> AuditResult<ScanConfiguration> {
        if let Some(name_pattern) = &self.name_pattern {
            config = config.with_name_pattern(name_pattern.clone());
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension.clone());
        }
        if let Some(target_ratio) = &self.target_ratio {
            config = config.with_target_ratio(target_ratio.to_ratio()?);
        }
        if let Some(tolerance_percent) = self.tolerance_percent {
            config = config.with_tolerance_percent(tolerance_percent);
        }
        if let Some(output) = &self.output {
            config = config.with_output_path(output.clone());
        }
        if let Some(threads) = self.threads {
            config = config.with_max_concurrent(threads);
        }
        Ok(config)
    }
}
