// エンジン層 - 発見・評価・出力のオーケストレーション
// サービス層を組み合わせて監査処理を提供

pub mod api;
pub mod consumer;
pub mod discovery;
mod pipeline;
pub mod producer;
pub mod scan_engine;

pub use api::{
    audit_directory, create_default_scan_engine, create_quiet_scan_engine, create_scan_engine,
    DefaultScanEngine,
};
pub use discovery::{discover_files, FileFilter};
pub use pipeline::ScanPipeline;
pub use scan_engine::{ScanEngine, ScanReport};
