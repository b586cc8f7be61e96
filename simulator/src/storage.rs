//! Hand log and registry files.
//!
//! Hand logs ending in `.json` use the JSON format; anything else uses the
//! binary codec.

use crate::Error;
use commonware_codec::{DecodeExt, Encode};
use std::{fs, path::Path};
use tally_execution::{Registry, RegistryConfig};
use tally_types::{HandLog, MAX_HANDS};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Binary,
    Json,
}

impl Format {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Binary,
        }
    }
}

fn read(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_log(path: &Path) -> Result<HandLog, Error> {
    let bytes = read(path)?;
    let log = match Format::of(path) {
        Format::Binary => {
            HandLog::decode(bytes.as_slice()).map_err(|source| Error::Codec {
                path: path.to_path_buf(),
                source,
            })?
        }
        Format::Json => serde_json::from_slice(&bytes).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?,
    };
    debug!(path = %path.display(), hands = log.len(), "loaded hand log");
    Ok(log)
}

/// Refuses logs that [load_log] could not read back.
pub fn save_log(path: &Path, log: &HandLog) -> Result<(), Error> {
    if log.len() > MAX_HANDS {
        return Err(Error::TooLong {
            path: path.to_path_buf(),
        });
    }
    let bytes = match Format::of(path) {
        Format::Binary => log.encode().to_vec(),
        Format::Json => serde_json::to_vec_pretty(log).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?,
    };
    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), hands = log.len(), "saved hand log");
    Ok(())
}

/// Reads a YAML registry, or returns the standard registry when no path is given.
pub fn load_registry(path: Option<&Path>) -> Result<Registry, Error> {
    let Some(path) = path else {
        return Ok(Registry::standard());
    };
    let bytes = read(path)?;
    let config: RegistryConfig = serde_yaml::from_slice(&bytes).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Registry::from_config(&config).map_err(|source| Error::Registry {
        path: path.to_path_buf(),
        source,
    })
}
