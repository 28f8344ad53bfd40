//! # Ecosim Core
//!
//! Simulation engine for a small predator, prey and resource ecosystem.
//!
//! This crate contains:
//! - Species behaviour (movement, diet, hunting, sleep, breeding, death)
//! - Resource consumption and regeneration
//! - Environments with seasons and habitat rules
//! - Minimum-separation placement of new entities
//! - The per-tick interaction resolver and the ecosystem orchestrator
//! - Configuration, errors, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use ecosim_core::config::AppConfig;
//! use ecosim_core::ecosystem::Ecosystem;
//! use ecosim_core::environment::Environment;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! let mut eco = Ecosystem::new(config).unwrap();
//! let forest = eco.add_environment(Environment::forest("Forest", 1.0));
//! eco.spawn_species("Rabbit", "Thumper", 80, forest).unwrap();
//! eco.spawn_resource("Grass", 50, 0.1, forest).unwrap();
//!
//! eco.run_cycle();
//! let events = eco.resolve_interactions();
//! println!("{} events\n{}", events.len(), eco.report());
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// The ecosystem orchestrator and its cycle
pub mod ecosystem;
/// Environments, seasons and habitat rules
pub mod environment;
/// Error types and result alias
pub mod error;
/// Events produced by the interaction passes
pub mod interaction;
/// Simulation counters and logging setup
pub mod metrics;
/// Random placement under a minimum-separation constraint
pub mod placement;
/// Per-kind creation counters
pub mod population;
/// Per-kind behaviour constants
pub mod profile;
/// Resource quantity rules
pub mod resource;
/// Species behaviour
pub mod species;
/// Systems run over whole environments (rules, interactions, stats)
pub mod systems;

pub use ecosystem::{CycleReport, Ecosystem};
pub use error::{EcosystemError, Result};
pub use metrics::{init_logging, Metrics};
pub use resource::ResourceLogic;
pub use species::SpeciesLogic;
