use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or controlling an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Game setup finished without selecting an active scene.
    #[error("no active scene set")]
    NoActiveScene,

    /// The game loop was started while it was already running.
    #[error("game loop is already running")]
    AlreadyRunning,

    /// An asset failed to load during game setup.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Errors raised while preparing external resources.
///
/// These abort the specific construction step and propagate to the
/// scene/game setup code; the tick loop never produces them.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The referenced file does not exist.
    #[error("asset not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The resource exists but could not be interpreted.
    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },

    /// An underlying read or write failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    pub(crate) fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            what,
            detail: detail.into(),
        }
    }
}
