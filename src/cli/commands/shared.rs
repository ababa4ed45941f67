//! Shared components for CLI commands

use crate::Result;
use crate::app::models::RemovalReason;
use crate::app::services::pipeline::PipelineResult;
use colored::Colorize;
use tracing::debug;

/// Set up structured logging for a CLI command
///
/// Honors `RUST_LOG` when set; otherwise filters this crate at the
/// level derived from the verbosity flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("icq_processor={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a colored human summary of a pipeline run to stdout
pub fn print_run_summary(result: &PipelineResult) {
    println!();
    println!("{}", "Cleaning complete".green().bold());
    println!("  {:<22} {}", "Input observations:", result.stats.total_input);
    println!("  {:<22} {}", "Removed by filters:", result.stats.filtered);
    println!("  {:<22} {}", "Duplicate dates:", result.stats.deduplicated);
    println!(
        "  {:<22} {} ({:.1}% retained)",
        "Surviving:".bold(),
        result.stats.final_output,
        result.stats.success_rate()
    );

    if let Ok(audit) = result.audit() {
        println!();
        println!("{}", "Removals by reason".bold());
        for reason in RemovalReason::ALL {
            let count = audit.count(reason);
            let line = format!("  {:<24} {}", reason.key(), count);
            if count > 0 {
                println!("{}", line.yellow());
            } else {
                println!("{}", line.dimmed());
            }
        }
    }
}
