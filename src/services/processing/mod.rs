// 画像評価機能
// 単一画像ファイルのサイズ読み取りと比率判定

pub mod worker;

// 公開API
pub use worker::evaluate_file;
