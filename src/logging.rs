// ログ初期化
// 診断ログはstderrへ出し、stdoutはサマリー表示に残す

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 既定のフィルタ文字列を決定
///
/// `--verbose` が `--quiet` より優先される。
pub fn default_filter(quiet: bool, verbose: bool) -> &'static str {
    if verbose {
        "aspect_audit=debug"
    } else if quiet {
        "aspect_audit=warn"
    } else {
        "aspect_audit=info"
    }
}

/// グローバルなtracing subscriberを初期化
///
/// `RUST_LOG` が設定されていればそちらを使う。2回目以降の呼び出しは無視される。
pub fn init_logging(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet, verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
