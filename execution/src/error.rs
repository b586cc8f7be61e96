use crate::config::ConfigError;
use tally_types::ParseOutcomeError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidOutcome(#[from] ParseOutcomeError),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}
