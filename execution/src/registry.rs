use crate::config::{ConfigError, RegistryConfig};
use crate::strategy::{Progression, Strategy, Verdict};
use tally_types::{Outcome, StrategySnapshot};
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    name: String,
    strategy: Strategy,
}

/// Named strategies evaluated side by side, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in panel (see [RegistryConfig::standard]).
    pub fn standard() -> Self {
        Self::from_config(&RegistryConfig::standard()).expect("standard registry is valid")
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: impl Into<Strategy>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.get(&name).is_some() {
            return Err(ConfigError::DuplicateName { name });
        }
        self.entries.push(Entry {
            name,
            strategy: strategy.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Strategy> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.strategy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Strategy)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.strategy))
    }

    pub(crate) fn observe(&mut self, outcome: Outcome) {
        for entry in &mut self.entries {
            let verdict = entry.strategy.observe(outcome);
            if let Some(verdict) = verdict {
                trace!(
                    strategy = entry.name.as_str(),
                    hit = verdict == Verdict::Hit,
                    "settled"
                );
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.strategy.reset();
        }
    }

    pub fn snapshots(&self) -> Vec<StrategySnapshot> {
        self.entries
            .iter()
            .map(|entry| entry.strategy.snapshot(&entry.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STANDARD_SEQUENCES;
    use crate::strategy::{Phased, Simple};
    use tally_types::Prediction;

    #[test]
    fn test_standard_registry() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 10);
        for (name, sequence) in STANDARD_SEQUENCES {
            match registry.get(name) {
                Some(Strategy::Simple(strategy)) => {
                    assert_eq!(strategy.sequence().to_string(), sequence)
                }
                other => panic!("{name}: unexpected strategy {other:?}"),
            }
        }
        assert_eq!(registry.get("Trigger Happy").unwrap().kind(), "conditional");
        assert_eq!(registry.get("The Switch").unwrap().kind(), "phased");
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = Registry::new();
        registry
            .register("A", Simple::new("P".parse().unwrap()))
            .unwrap();
        assert_eq!(
            registry.register("A", Phased::new()),
            Err(ConfigError::DuplicateName {
                name: "A".to_string()
            })
        );
        assert_eq!(registry.register("", Phased::new()), Err(ConfigError::EmptyName));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_observe_and_reset_every_strategy() {
        let mut registry = Registry::new();
        registry
            .register("Banker", Simple::new("B".parse().unwrap()))
            .unwrap();
        registry
            .register("Player", Simple::new("P".parse().unwrap()))
            .unwrap();

        registry.observe(Outcome::Banker);
        let snapshots = registry.snapshots();
        assert_eq!(snapshots[0].name, "Banker");
        assert_eq!(snapshots[0].wins, 1);
        assert_eq!(snapshots[1].losses, 1);
        assert_eq!(snapshots[1].prediction, Prediction::Guess(Outcome::Player));

        let fresh = {
            let mut registry = registry.clone();
            registry.reset();
            registry
        };
        assert!(fresh.snapshots().iter().all(|s| s.wins + s.losses == 0));
    }
}
