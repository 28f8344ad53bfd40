pub mod macros;

use ecosim_lib::model::config::AppConfig;
use ecosim_lib::model::ecosystem::Ecosystem;
use ecosim_lib::model::entity::{Position, Species, SpeciesKind, SpeciesTraits};
use ecosim_lib::model::environment::Environment;
use ecosim_lib::model::resource::{Resource, ResourceKind};

#[allow(dead_code)]
pub struct EcosystemBuilder {
    config: AppConfig,
    environments: Vec<Environment>,
}

#[allow(dead_code)]
impl EcosystemBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        Self {
            config,
            environments: Vec::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_environment(mut self, env: Environment) -> Self {
        self.environments.push(env);
        self
    }

    pub fn build(self) -> Ecosystem {
        let mut eco = Ecosystem::new(self.config).expect("Failed to create ecosystem");
        for env in self.environments {
            eco.add_environment(env);
        }
        eco
    }
}

/// An animal with default traits at a fixed spot, bound to `env`.
#[allow(dead_code)]
pub fn animal(eco: &Ecosystem, env: usize, kind: SpeciesKind, energy: i32, x: i32, y: i32) -> Species {
    Species::new(
        kind.label(),
        energy,
        Position::new(x, y),
        eco.environments()[env].id(),
        10,
        SpeciesTraits::default_for(kind),
    )
}

#[allow(dead_code)]
pub fn resource(kind: ResourceKind, quantity: u32, x: i32, y: i32) -> Resource {
    Resource::new(kind, quantity, Position::new(x, y), 0.1)
}
