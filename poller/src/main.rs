use clap::Parser;
use tracing_subscriber::prelude::*;

fn init_logging(debug: bool) {
    let max_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            let target = meta.target();
            let ours = ["poller", "report", "bf4_server_status"]
                .iter()
                .any(|krate| target.starts_with(krate));
            ours && *meta.level() <= max_level
        }));

    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Setting up logging: {}", e);
    }
}

async fn execute(cli: poller::config::Cli) -> Result<poller::RunSummary, poller::RunError> {
    let config = poller::Config::from_cli(cli)?;
    let fetcher = poller::fetch::HttpFetcher::new()?;

    poller::run_exclusive(&config, &fetcher, poller::guard::PROCESS_NAME).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = poller::config::Cli::parse();
    init_logging(cli.debug);

    match execute(cli).await {
        Ok(summary) => {
            tracing::info!(
                "Wrote {} file(s), {} of {} player(s) with reputation data",
                summary.files_written.len(),
                summary.with_data,
                summary.player_count
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                poller::RunError::Guard(poller::guard::GuardError::AlreadyRunning) => {
                    println!("already running.  exiting.")
                }
                poller::RunError::Fetch(_) => println!("giving up.  exiting."),
                other => eprintln!("Error: {}", other),
            }
            tracing::debug!("{:?}", e);
            std::process::ExitCode::from(e.exit_code())
        }
    }
}
