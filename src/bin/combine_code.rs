use clap::Parser;
use project_tools::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level.as_tracing_level())
        .with_target(false)
        .init();

    match run(cli) {
        Ok(report) => {
            println!("--- Summary ---");
            println!("Successfully processed {} files.", report.files_processed);
            println!(
                "Skipped {} binary, excluded, or unreadable files.",
                report.files_skipped
            );
            println!("Combined output saved to: {}", report.output_path.display());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("[ERROR] Combining source files failed: {e:#}");
            std::process::exit(1);
        }
    }
}
