/// Everything that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Guard(#[from] crate::guard::GuardError),
    #[error("Creating HTTP client: {0}")]
    Client(#[from] crate::fetch::FetchError),
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchExhausted),
    #[error("Unable to query battlelog: {0}")]
    Status(#[from] report::status::StatusError),
    #[error("Writing {path:?}: {source}")]
    Output {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Guard(crate::guard::GuardError::AlreadyRunning) => 2,
            Self::Fetch(_) => 3,
            Self::Status(_) => 4,
            Self::Output { .. } => 5,
            Self::Config(_) | Self::Guard(_) | Self::Client(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_kinds_have_distinct_codes() {
        let errors = [
            RunError::Guard(crate::guard::GuardError::AlreadyRunning),
            RunError::Fetch(crate::fetch::FetchExhausted {
                url: "http://status.test/".to_owned(),
                attempts: 5,
                last: crate::fetch::FetchError::Status(503),
            }),
            RunError::Status(report::status::StatusError::UnknownMap("MP_Nowhere".to_owned())),
            RunError::Output {
                path: "index.html".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
        ];

        let codes: Vec<u8> = errors.iter().map(RunError::exit_code).collect();

        assert_eq!(vec![2, 3, 4, 5], codes);
    }

    #[test]
    fn messages() {
        let err = RunError::Guard(crate::guard::GuardError::AlreadyRunning);
        assert_eq!("already running", err.to_string());

        let err = RunError::Status(report::status::StatusError::UnknownMode("3".to_owned()));
        assert_eq!(
            "Unable to query battlelog: Unknown mode identifier \"3\"",
            err.to_string()
        );
    }
}
