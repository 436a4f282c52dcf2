// aspect_audit - 画像のアスペクト比監査
//
// レイヤー構成:
//   core         共通型・エラー・比率判定・協調者トレイト
//   storage      ファイル走査
//   image_loader 画像サイズ読み取り
//   services     設定・進捗報告・結果出力・単一ファイル評価
//   engine       発見・評価パイプライン・オーケストレーション
//   cli          コマンドライン引数とコマンド実行

pub mod cli;
pub mod core;
pub mod engine;
pub mod image_loader;
pub mod logging;
pub mod services;
pub mod storage;

pub use crate::core::{
    is_conforming, AuditError, AuditResult, FileEvaluation, ImageDescriptor, RatioPolicy,
    ScanResult, ScanSummary,
};
pub use engine::{ScanEngine, ScanReport};
pub use services::ScanConfiguration;
