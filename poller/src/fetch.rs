use futures::FutureExt;

pub const MAX_ATTEMPTS: u32 = 5;
pub const RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(1);
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("Giving up on {url} after {attempts} attempts: {last}")]
pub struct FetchExhausted {
    pub url: String,
    pub attempts: u32,
    #[source]
    pub last: FetchError,
}

/// A single GET returning a JSON document, without any retrying.
pub trait JsonFetcher: Send + Sync {
    fn get_json<'f, 's>(
        &'s self,
        url: &'s str,
    ) -> futures::future::BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        's: 'f;
}

pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bf4-server-status/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json<'f, 's>(
        &'s self,
        url: &'s str,
    ) -> futures::future::BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        's: 'f,
    {
        async move {
            let response = self.http.get(url).send().await?;
            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            let body = response.bytes().await?;
            let value = serde_json::from_slice(&body)?;
            Ok(value)
        }
        .boxed()
    }
}

/// Runs `op` until it succeeds, at most [`MAX_ATTEMPTS`] times, waiting [`RETRY_DELAY`]
/// between attempts.
///
/// Whether running out of attempts is fatal is up to the caller.
pub async fn with_retries<T, F, Fut>(url: &str, mut op: F) -> Result<T, FetchExhausted>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 1;
    loop {
        let err = match op().await {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };

        tracing::warn!("Query failed - URL was {}: {}", url, err);

        if attempt >= MAX_ATTEMPTS {
            tracing::error!("Giving up on {} after {} attempts", url, attempt);
            return Err(FetchExhausted {
                url: url.to_owned(),
                attempts: attempt,
                last: err,
            });
        }

        tracing::warn!("Attempting retry {} of {}", attempt, MAX_ATTEMPTS - 1);
        tokio::time::sleep(RETRY_DELAY).await;
        attempt += 1;
    }
}

pub async fn fetch_json(
    fetcher: &dyn JsonFetcher,
    url: &str,
) -> Result<serde_json::Value, FetchExhausted> {
    with_retries(url, || fetcher.get_json(url)).await
}
