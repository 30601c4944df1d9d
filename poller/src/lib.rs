pub mod config;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod output;
pub mod status;

pub use config::Config;
pub use error::RunError;

#[derive(Debug)]
pub struct RunSummary {
    pub player_count: u64,
    pub with_data: usize,
    pub files_written: Vec<std::path::PathBuf>,
}

/// Fetches everything, renders the page and only then touches the output files.
#[tracing::instrument(skip_all)]
pub async fn run(config: &Config, fetcher: &dyn fetch::JsonFetcher) -> Result<RunSummary, RunError> {
    let status = status::resolve(config, fetcher).await?;
    tracing::info!(
        "{} player(s) on {} {}",
        status.player_count,
        status.map_name,
        status.mode_name
    );

    let player_report = enrich::enrich(config, fetcher, &status.player_names).await;

    let rendered = report::page::render(&config.page(), &status, &player_report, chrono::Utc::now());
    let files_written = output::write(&config.output_dir, &rendered).await?;

    Ok(RunSummary {
        player_count: status.player_count,
        with_data: player_report.with_data(),
        files_written,
    })
}

/// Like [`run`], but refuses to start while another run holds the lock `lock_name`.
pub async fn run_exclusive(
    config: &Config,
    fetcher: &dyn fetch::JsonFetcher,
    lock_name: &str,
) -> Result<RunSummary, RunError> {
    let _guard = guard::acquire(lock_name)?;

    run(config, fetcher).await
}
