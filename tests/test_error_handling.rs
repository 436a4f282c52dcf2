// エラーハンドリングの統合テスト
mod fixtures;

use aspect_audit::{engine::create_quiet_scan_engine, AuditError, ScanConfiguration};
use fixtures::{read_lines, write_jpeg, MediaLibrary};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_root_is_fatal_before_scan() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let error = create_quiet_scan_engine()
        .run(ScanConfiguration::new(temp_dir.path().join("missing")).with_output_path(&output))
        .await
        .unwrap_err();

    assert!(matches!(error, AuditError::InvalidRootDirectory { .. }));
    assert!(!error.is_recoverable());
    // スキャン前に失敗するので出力も作られない
    assert!(!output.exists());
}

#[tokio::test]
async fn test_root_must_be_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("fanart.jpg");
    write_jpeg(&file, 16, 9);

    let error = create_quiet_scan_engine()
        .scan(ScanConfiguration::new(&file))
        .await
        .unwrap_err();

    assert!(matches!(error, AuditError::InvalidRootDirectory { .. }));
}

#[tokio::test]
async fn test_invalid_ratio_settings_are_configuration_errors() {
    let library = MediaLibrary::empty();
    let engine = create_quiet_scan_engine();

    let zero_ratio = engine
        .scan(ScanConfiguration::new(&library.root).with_target_ratio(0.0))
        .await
        .unwrap_err();
    assert!(matches!(zero_ratio, AuditError::Configuration { .. }));

    let zero_threads = engine
        .scan(ScanConfiguration::new(&library.root).with_max_concurrent(0))
        .await
        .unwrap_err();
    assert!(matches!(zero_threads, AuditError::Configuration { .. }));
}

#[tokio::test]
async fn test_corrupt_files_never_abort_scan() {
    let library = MediaLibrary::many(14);

    let result = create_quiet_scan_engine()
        .scan(ScanConfiguration::new(&library.root).with_name_pattern("fanart"))
        .await
        .unwrap();

    assert_eq!(result.total_discovered(), 14);
    assert_eq!(result.failed_count(), 2);
    for failure in result.failures() {
        assert!(!failure.cause.is_empty());
        assert!(!result.non_conforming().contains(&failure.path));
    }
}

#[tokio::test]
async fn test_output_failure_keeps_result_and_allows_retry() {
    let library = MediaLibrary::mixed();
    let unwritable = library.output_path("no-such-dir").join("out.txt");
    let engine = create_quiet_scan_engine();

    let error = engine
        .run(
            ScanConfiguration::new(&library.root)
                .with_name_pattern("fanart")
                .with_output_path(&unwritable),
        )
        .await
        .unwrap_err();

    assert!(matches!(error, AuditError::OutputWrite { .. }));
    assert!(error.suggestion().is_some());

    let pending = error.into_pending_result().unwrap();
    assert_eq!(pending.non_conforming_count(), 1);
    assert_eq!(pending.failed_count(), 1);

    // 結果は失われていないので別の出力先へ書き直せる
    let retry_output = library.output_path("retry.txt");
    let written = engine.write_result(&retry_output, pending).await.unwrap();

    assert_eq!(
        read_lines(&retry_output),
        vec![written.non_conforming()[0].to_string_lossy().to_string()]
    );
}
