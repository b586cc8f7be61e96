//! Command-line host for the tally engine: interactive play, replay of saved
//! hand logs and simulated shoes.

use std::path::PathBuf;
use tally_execution::ConfigError;
use tally_types::MAX_HANDS;
use thiserror::Error;

pub mod command;
pub mod render;
pub mod session;
pub mod storage;

pub use command::{Command, ParseCommandError};
pub use render::Mode;
pub use session::{play, simulate, write_snapshot, Reply, Session};

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid hand log {}: {source}", .path.display())]
    Codec {
        path: PathBuf,
        source: commonware_codec::Error,
    },
    #[error("invalid hand log {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid registry file {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid registry file {}: {source}", .path.display())]
    Registry {
        path: PathBuf,
        source: ConfigError,
    },
    #[error("hand log {} would exceed {} hands", .path.display(), MAX_HANDS)]
    TooLong { path: PathBuf },
    #[error("session is full ({} hands); undo or reset to continue", MAX_HANDS)]
    Full,
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] std::io::Error),
}
