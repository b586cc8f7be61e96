//! Registry configuration.
//!
//! ```yaml
//! strategies:
//!   - kind: simple
//!     name: The Cake
//!     sequence: BBPBBPPB
//!   - kind: conditional
//!     name: Trigger Happy
//!     sequence: BBP
//!     trigger: P
//!   - kind: phased
//!     name: The Switch
//! ```

use crate::registry::Registry;
use crate::strategy::{Conditional, Phased, Sequence, SequenceError, Simple, Strategy};
use serde::{Deserialize, Serialize};
use tally_types::Outcome;
use thiserror::Error;

/// Sequences of the cyclic strategies in the standard registry.
pub const STANDARD_SEQUENCES: [(&str, &str); 8] = [
    ("The Cake", "BBPBBPPB"),
    ("ZachFortune", "BBPPBPB"),
    ("Mr. Toad", "PBPBPBPB"),
    ("The Marcos", "PBPPBB"),
    ("Double Trouble", "BBPPBB"),
    ("The Gentleman", "BPBPPBBP"),
    ("Mr. Miyagi", "PPPBBPPP"),
    ("Animal Style", "BBBBPPPP"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub strategies: Vec<StrategyConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategyConfig {
    Simple {
        name: String,
        sequence: String,
    },
    Conditional {
        name: String,
        sequence: String,
        #[serde(default = "default_trigger")]
        trigger: Outcome,
    },
    Phased {
        name: String,
    },
}

fn default_trigger() -> Outcome {
    Outcome::Player
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("strategy {name:?}: {source}")]
    InvalidSequence {
        name: String,
        #[source]
        source: SequenceError,
    },
    #[error("strategy name must not be empty")]
    EmptyName,
    #[error("duplicate strategy name: {name:?}")]
    DuplicateName { name: String },
    #[error("registry has no strategies")]
    EmptyRegistry,
}

impl StrategyConfig {
    pub fn name(&self) -> &str {
        match self {
            StrategyConfig::Simple { name, .. }
            | StrategyConfig::Conditional { name, .. }
            | StrategyConfig::Phased { name } => name,
        }
    }

    pub fn build(&self) -> Result<Strategy, ConfigError> {
        let invalid = |source| ConfigError::InvalidSequence {
            name: self.name().to_string(),
            source,
        };
        Ok(match self {
            StrategyConfig::Simple { sequence, .. } => {
                let sequence: Sequence = sequence.parse().map_err(invalid)?;
                Simple::new(sequence).into()
            }
            StrategyConfig::Conditional {
                sequence, trigger, ..
            } => {
                let sequence: Sequence = sequence.parse().map_err(invalid)?;
                Conditional::new(sequence, *trigger).map_err(invalid)?.into()
            }
            StrategyConfig::Phased { .. } => Phased::new().into(),
        })
    }
}

impl RegistryConfig {
    /// The eight cyclic strategies plus one conditional and one phased strategy.
    pub fn standard() -> Self {
        let mut strategies: Vec<StrategyConfig> = STANDARD_SEQUENCES
            .iter()
            .map(|(name, sequence)| StrategyConfig::Simple {
                name: name.to_string(),
                sequence: sequence.to_string(),
            })
            .collect();
        strategies.push(StrategyConfig::Conditional {
            name: "Trigger Happy".to_string(),
            sequence: "BBP".to_string(),
            trigger: Outcome::Player,
        });
        strategies.push(StrategyConfig::Phased {
            name: "The Switch".to_string(),
        });
        Self { strategies }
    }

    /// Builds the registry, rejecting bad sequences, empty or duplicate names,
    /// and empty registries.
    pub fn validate(&self) -> Result<Registry, ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        let mut registry = Registry::new();
        for config in &self.strategies {
            registry.register(config.name(), config.build()?)?;
        }
        Ok(registry)
    }
}
