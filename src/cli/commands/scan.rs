use crate::core::{parse_ratio, AuditResult};
use crate::engine::{create_scan_engine, ScanReport};
use crate::image_loader::DimensionReader;
use crate::services::{ScanConfigFile, ScanConfiguration};
use anyhow::Result;
use std::path::PathBuf;

/// Arguments of the scan command, gathered to keep the executor signature short
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub target_directory: PathBuf,
    pub name: Option<String>,
    pub ratio: Option<String>,
    pub tolerance: Option<f64>,
    pub output: Option<PathBuf>,
    pub extension: Option<String>,
    pub threads: Option<usize>,
    pub config_file: Option<PathBuf>,
    pub parallel: bool,
    pub follow_links: bool,
    pub quiet: bool,
}

/// 引数と設定ファイルからスキャン設定を構築
///
/// 優先順位: コマンドライン引数 > 設定ファイル > 既定値
pub fn build_configuration(args: &ScanArgs) -> AuditResult<ScanConfiguration> {
    let mut config = ScanConfiguration::new(&args.target_directory);

    if let Some(path) = &args.config_file {
        config = ScanConfigFile::load(path)?.apply(config)?;
    }

    if let Some(name) = &args.name {
        config = config.with_name_pattern(name.clone());
    }
    if let Some(ratio) = &args.ratio {
        config = config.with_target_ratio(parse_ratio(ratio)?);
    }
    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance_percent(tolerance);
    }
    if let Some(output) = &args.output {
        config = config.with_output_path(output.clone());
    }
    if let Some(extension) = &args.extension {
        config = config.with_extension(extension.clone());
    }
    if args.parallel {
        config = config.with_parallelism_from_cpus();
    }
    if let Some(threads) = args.threads {
        config = config.with_max_concurrent(threads);
    }

    Ok(config.with_progress_reporting(!args.quiet))
}

/// Execute the scan command and print the summary
pub async fn execute_scan(args: ScanArgs) -> Result<ScanReport> {
    let config = build_configuration(&args)?;
    let engine = create_scan_engine(args.follow_links, args.quiet);

    if !args.quiet {
        println!("🔍 アスペクト比スキャン開始");
        println!("   - 対象ディレクトリ: {}", config.root_directory().display());
        println!(
            "   - 目標比率: {:.4} (許容誤差 ±{}%)",
            config.target_ratio(),
            config.tolerance_percent()
        );
        println!("   - 読み取り方式: {}", engine.reader().strategy_name());
        println!("   - 出力ファイル: {}", config.output_path().display());
    }

    let report = engine.run(config).await?;

    print_summary(&report);
    Ok(report)
}

fn print_summary(report: &ScanReport) {
    let summary = &report.summary;

    println!("📊 スキャン結果:");
    println!("   - 対象ファイル数: {}", summary.total_discovered);
    println!("   - 適合: {}", summary.conforming);
    println!("   - 不適合: {}", summary.non_conforming);
    println!("   - 読み取り失敗: {}", summary.failed);
    println!("   - 処理時間: {}ms", summary.elapsed_ms);

    if summary.failed > 0 {
        println!("⚠️  {}個のファイルを読み取れませんでした", summary.failed);
    }

    println!("📄 結果は {} に保存されました", report.output_path.display());
}
