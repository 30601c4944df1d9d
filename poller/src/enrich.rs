use crate::{config::Config, fetch};

/// Pause before every player lookup, to go easy on the reputation API
pub const PLAYER_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

/// Looks up the reputation of every player, one after the other, in display order.
///
/// A player whose lookup fails, even after all retries, ends up without data instead of
/// failing the run.
#[tracing::instrument(skip_all, fields(players = names.len()))]
pub async fn enrich<S>(
    config: &Config,
    fetcher: &dyn fetch::JsonFetcher,
    names: &[S],
) -> common::PlayerReport
where
    S: AsRef<str>,
{
    let mut player_report = common::PlayerReport::new();

    for name in report::order::display_order(names) {
        if player_report.contains(&name) {
            tracing::debug!("{:?} is listed more than once", name);
            continue;
        }

        tokio::time::sleep(PLAYER_DELAY).await;

        let url = config.reputation_url(&name);
        let record = match fetch::fetch_json(fetcher, url.as_str()).await {
            Ok(value) => report::reputation::parse(&value),
            Err(e) => {
                tracing::warn!("No reputation data for {:?}: {}", name, e);
                None
            }
        };

        tracing::debug!(
            "{} {}",
            name,
            record
                .as_ref()
                .and_then(|r| r.cheat_score)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "None".to_owned())
        );

        player_report.insert(name, record);
    }

    player_report
}
