pub const DEFAULT_STATUS_URL: &str = "http://battlelog.battlefield.com/bf4/servers/show/PC/";
pub const DEFAULT_REPUTATION_URL: &str = "http://api.bf4db.com/api-player.php";
pub const DEFAULT_REFRESH: u64 = 60;

/// Status web page for your BF4 server.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Battlelog server ID
    pub server_id: String,

    /// Directory the generated HTML file(s) are written to
    pub output_dir: std::path::PathBuf,

    /// Show debug info in the terminal
    #[arg(short, long)]
    pub debug: bool,

    /// Base of the server browser URL, the server ID is appended to it
    #[arg(long, env = "BF4_STATUS_URL", default_value = DEFAULT_STATUS_URL)]
    pub status_url: String,

    /// Player lookup endpoint of the reputation API
    #[arg(long, env = "BF4_REPUTATION_URL", default_value = DEFAULT_REPUTATION_URL)]
    pub reputation_url: String,

    /// Refresh interval of the generated page, in seconds
    #[arg(long, default_value_t = DEFAULT_REFRESH)]
    pub refresh: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("URL {0:?} cannot have a path")]
    CannotBeBase(String),
}

/// Everything a run needs to know, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_id: String,
    pub output_dir: std::path::PathBuf,
    pub debug: bool,
    pub refresh: u64,
    server_url: reqwest::Url,
    reputation_base: reqwest::Url,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mut server_url = parse_url(&cli.status_url)?;
        server_url
            .path_segments_mut()
            .map_err(|_| ConfigError::CannotBeBase(cli.status_url.clone()))?
            .pop_if_empty()
            .push(&cli.server_id)
            .push("");
        server_url.set_query(Some("json=1"));

        let reputation_base = parse_url(&cli.reputation_url)?;

        Ok(Self {
            server_id: cli.server_id,
            output_dir: cli.output_dir,
            debug: cli.debug,
            refresh: cli.refresh,
            server_url,
            reputation_base,
        })
    }

    pub fn server_url(&self) -> &reqwest::Url {
        &self.server_url
    }

    pub fn reputation_url(&self, player: &str) -> reqwest::Url {
        let mut url = self.reputation_base.clone();
        url.query_pairs_mut().append_pair("name", player);
        url
    }

    pub fn page(&self) -> report::page::Config {
        report::page::Config {
            refresh: self.refresh,
        }
    }
}

fn parse_url(raw: &str) -> Result<reqwest::Url, ConfigError> {
    reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}
