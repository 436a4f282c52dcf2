// 結果出力機能
// 非準拠ファイル一覧の書き込みと、並列処理結果の収集

pub mod collector;
pub mod implementations;

// 公開API
pub use collector::spawn_result_collector;
pub use implementations::{LineFileWriter, MemoryResultWriter};
