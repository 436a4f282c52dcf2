use aspect_audit::{
    cli::{execute_check, execute_scan, Cli, Commands, ScanArgs},
    logging::init_logging,
    AuditError,
};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Scan {
            target_directory,
            name,
            ratio,
            tolerance,
            output,
            extension,
            threads,
            parallel,
            follow_links,
            config_file,
            quiet,
            verbose,
        } => {
            init_logging(quiet, verbose);

            let args = ScanArgs {
                target_directory,
                name,
                ratio,
                tolerance,
                output,
                extension,
                threads,
                config_file,
                parallel,
                follow_links,
                quiet,
            };
            execute_scan(args).await.map(|_| ())
        }
        Commands::Check {
            width,
            height,
            ratio,
            tolerance,
        } => {
            init_logging(false, false);
            execute_check(width, height, &ratio, tolerance)
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            if let Some(suggestion) = error
                .downcast_ref::<AuditError>()
                .and_then(AuditError::suggestion)
            {
                eprintln!("💡 {suggestion}");
            }
            ExitCode::FAILURE
        }
    }
}
