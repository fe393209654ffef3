//! Proxygen
//!
//! Generates TypeScript client proxies from a running service's API definition.

use clap::Parser;
use proxygen_gen::config::{CliArgs, GeneratorConfig};
use proxygen_gen::errors::GeneratorError;
use proxygen_gen::pipeline::run_remote;
use proxygen_gen::progress::TracingProgress;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            // Progress lines are INFO on proxygen_gen
            0 => "warn,proxygen_gen=info".to_string(),
            1 => "warn,proxygen_gen=debug".to_string(),
            2 => "info,proxygen_gen=trace".to_string(),
            _ => "debug,proxygen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(verbose >= 2)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), GeneratorError> {
    dotenvy::dotenv().ok();

    let cli = CliArgs::parse();
    init_tracing(cli.verbose, cli.json);

    let config = GeneratorConfig::resolve(&cli)?;
    tracing::debug!(
        url = %config.url,
        module = %config.module,
        output = %config.output.display(),
        target = %config.target,
        dry_run = config.dry_run,
        "Resolved configuration"
    );

    let summary = run_remote(&config, &TracingProgress).await?;

    if config.dry_run {
        print!("{}", summary.output.render_listing());
    }

    Ok(())
}
