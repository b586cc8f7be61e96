pub mod config;
pub mod engine;
pub mod registry;
pub mod shoe;
pub mod strategy;

mod error;
mod integration_tests;

pub use config::{ConfigError, RegistryConfig, StrategyConfig, STANDARD_SEQUENCES};
pub use engine::Engine;
pub use error::Error;
pub use registry::Registry;
pub use shoe::{Hand, Shoe};
pub use strategy::{Conditional, Phased, Progression, Sequence, Simple, Strategy, Verdict};
