use futures::FutureExt;
use poller::fetch::{FetchError, JsonFetcher};
use std::collections::HashMap;
use std::sync::Mutex;

pub const STATUS_BASE: &str = "http://status.test/servers/";
pub const REPUTATION_BASE: &str = "http://reputation.test/api-player.php";
pub const SERVER_ID: &str = "4d0151b3-81ff-4268-b4e8-5e60d5bc8765";

struct Script {
    failures_left: Option<usize>,
    reply: Option<serde_json::Value>,
}

/// Answers from a fixed script instead of the network, and remembers when it was asked.
#[derive(Default)]
pub struct ScriptedFetcher {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<(String, tokio::time::Instant)>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, reply: serde_json::Value) {
        self.script(url, Some(0), Some(reply));
    }

    /// Fails every request for `url`
    pub fn fail(&self, url: &str) {
        self.script(url, None, None);
    }

    pub fn fail_then_respond(&self, url: &str, failures: usize, reply: serde_json::Value) {
        self.script(url, Some(failures), Some(reply));
    }

    fn script(&self, url: &str, failures_left: Option<usize>, reply: Option<serde_json::Value>) {
        self.scripts.lock().unwrap().insert(
            url.to_owned(),
            Script {
                failures_left,
                reply,
            },
        );
    }

    pub fn calls(&self) -> Vec<(String, tokio::time::Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|(u, _)| u == url).count()
    }

    fn answer(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_owned(), tokio::time::Instant::now()));

        let mut scripts = self.scripts.lock().unwrap();
        let script = match scripts.get_mut(url) {
            Some(s) => s,
            None => return Err(FetchError::Status(404)),
        };

        match script.failures_left {
            None => return Err(FetchError::Status(503)),
            Some(0) => {}
            Some(left) => {
                script.failures_left = Some(left - 1);
                return Err(FetchError::Status(503));
            }
        }

        script.reply.clone().ok_or(FetchError::Status(503))
    }
}

impl JsonFetcher for ScriptedFetcher {
    fn get_json<'f, 's>(
        &'s self,
        url: &'s str,
    ) -> futures::future::BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        's: 'f,
    {
        let result = self.answer(url);
        async move { result }.boxed()
    }
}

pub fn config(output_dir: &std::path::Path) -> poller::Config {
    let args: Vec<std::ffi::OsString> = vec![
        "bf4-server-status".into(),
        SERVER_ID.into(),
        output_dir.as_os_str().to_owned(),
        "--status-url".into(),
        STATUS_BASE.into(),
        "--reputation-url".into(),
        REPUTATION_BASE.into(),
    ];
    let cli = <poller::config::Cli as clap::Parser>::try_parse_from(args).unwrap();

    poller::Config::from_cli(cli).unwrap()
}

pub fn server_json(map: &str, mode: u64, players: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "type": "success",
        "message": {
            "SERVER_INFO": {
                "map": map,
                "mapMode": mode,
                "slots": { "2": { "current": players.len(), "max": 64 } },
            },
            "SERVER_PLAYERS": players
                .iter()
                .map(|p| serde_json::json!({ "persona": { "user": { "username": p } } }))
                .collect::<Vec<_>>(),
        }
    })
}

pub fn reputation_json(persona_id: &str, cheatscore: u64) -> serde_json::Value {
    serde_json::json!({
        "type": "success",
        "data": {
            "personaId": persona_id,
            "cheatscore": cheatscore,
            "bf4db_url": format!("http://bf4db.test/player/{}", persona_id),
        }
    })
}
