//! Plain data types shared by the simulation engine and the runner.
//!
//! Nothing in here carries behaviour beyond construction and simple
//! classification; the rules live in `ecosim_core`.

pub mod data;

pub use data::entity::{Family, Position, Species, SpeciesId, SpeciesKind, SpeciesTraits};
pub use data::environment::EnvironmentId;
pub use data::resource::{Resource, ResourceId, ResourceKind};
