// 設定管理機能
// スキャン設定の構築・検証と、JSON設定ファイルの読み込み

pub mod file;
pub mod implementations;

// 公開API
pub use file::{RatioValue, ScanConfigFile};
pub use implementations::{ScanConfiguration, DEFAULT_EXTENSION, DEFAULT_OUTPUT_FILE};
