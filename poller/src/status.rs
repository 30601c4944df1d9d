use crate::{config::Config, error::RunError, fetch};

/// Fetches and interprets the current state of the configured server.
///
/// Every failure here is fatal for the run.
#[tracing::instrument(skip_all, fields(server = %config.server_id))]
pub async fn resolve(
    config: &Config,
    fetcher: &dyn fetch::JsonFetcher,
) -> Result<common::ServerStatus, RunError> {
    let value = fetch::fetch_json(fetcher, config.server_url().as_str()).await?;

    report::status::parse(&value).map_err(|e| {
        tracing::debug!("Unable to query battlelog: {}", e);
        RunError::Status(e)
    })
}
