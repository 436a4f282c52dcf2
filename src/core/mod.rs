// コアレイヤー - 基盤となるトレイト、型、エラー定義、比率判定
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod ratio;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{AuditError, AuditResult, DecodeError};
pub use ratio::{is_conforming, parse_ratio, Classification, RatioPolicy};
pub use traits::{ProcessingConfig, ProgressReporter, ResultWriter};
pub use types::{DecodeFailure, FileEvaluation, ImageDescriptor, ScanResult, ScanSummary};
