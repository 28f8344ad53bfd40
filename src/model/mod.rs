pub use ecosim_core::{ResourceLogic, SpeciesLogic};
pub mod config {
    pub use ecosim_core::config::*;
}
pub mod ecosystem {
    pub use ecosim_core::ecosystem::*;
}
pub mod environment {
    pub use ecosim_core::environment::*;
}
pub mod interaction {
    pub use ecosim_core::interaction::*;
}
pub mod placement {
    pub use ecosim_core::placement::*;
}
pub mod species {
    pub use ecosim_core::species::*;
}
pub mod entity {
    pub use ecosim_data::{Family, Position, Species, SpeciesId, SpeciesKind, SpeciesTraits};
}
pub mod resource {
    pub use ecosim_core::resource::*;
    pub use ecosim_data::{Resource, ResourceId, ResourceKind};
}
pub mod stats {
    pub use ecosim_core::systems::stats::*;
}
