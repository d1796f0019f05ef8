use std::path::PathBuf;

/// Errors that stop the site runner before or during a scenario.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Failed to create log file: {0}")]
    LogFile(#[source] std::io::Error),
}
