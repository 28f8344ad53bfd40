//! The ecosystem orchestrator.
//!
//! Owns every environment, the per-kind population counters and the seeded
//! RNG, and drives one simulation cycle at a time:
//!
//! 1. apply each environment's rules,
//! 2. update every animal (remove the dead, move the rest, let them breed),
//! 3. step the seasons.
//!
//! Proximity eating and hunting are a separate pass,
//! [`Ecosystem::resolve_interactions`], that the runner calls after each
//! cycle.

use crate::config::AppConfig;
use crate::environment::{DeathCheck, Environment, Removal, SeasonalEffect};
use crate::error::{EcosystemError, Result};
use crate::interaction::InteractionEvent;
use crate::metrics::Metrics;
use crate::placement::{Bounds, Placer};
use crate::population::PopulationCounters;
use crate::species::{Direction, MoveOutcome, SpeciesLogic};
use crate::systems;
use crate::systems::stats::EcosystemReport;
use ecosim_data::{
    EnvironmentId, Position, Resource, ResourceId, ResourceKind, Species, SpeciesId, SpeciesKind,
    SpeciesTraits,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;

/// What one call to [`Ecosystem::run_cycle`] did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    /// Habitat scalar of each environment after its rules ran.
    pub rules: Vec<(EnvironmentId, f64)>,
    pub moved: usize,
    /// Sleeping animals that could not move.
    pub blocked: usize,
    pub births: usize,
    pub deaths: Vec<SpeciesId>,
    pub seasons: Vec<SeasonalEffect>,
}

#[derive(Debug)]
pub struct Ecosystem {
    environments: Vec<Environment>,
    counters: PopulationCounters,
    config: AppConfig,
    bounds: Bounds,
    placer: Placer,
    rng: ChaCha8Rng,
    metrics: Metrics,
    cycle: u64,
}

impl Ecosystem {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.world.bounds();
        bounds.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            environments: Vec::new(),
            counters: PopulationCounters::new(),
            placer: Placer::from(&config.placement),
            bounds,
            config,
            rng,
            metrics: Metrics::new(),
            cycle: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn counters(&self) -> &PopulationCounters {
        &self.counters
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn add_environment(&mut self, env: Environment) -> EnvironmentId {
        let id = env.id();
        tracing::info!(name = env.name(), habitat = env.habitat().label(), "Environment added");
        self.environments.push(env);
        id
    }

    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    #[must_use]
    pub fn environment(&self, id: EnvironmentId) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id() == id)
    }

    pub fn environment_mut(&mut self, id: EnvironmentId) -> Option<&mut Environment> {
        self.environments.iter_mut().find(|e| e.id() == id)
    }

    fn require_environment(&mut self, id: EnvironmentId) -> Result<&mut Environment> {
        self.environment_mut(id)
            .ok_or_else(|| EcosystemError::unknown_environment(id.to_string()))
    }

    /// Registers an animal in the environment its back-reference names and
    /// counts it towards its kind.
    pub fn add_species(&mut self, species: Species) -> Result<SpeciesId> {
        let kind = species.kind();
        let env = self.require_environment(species.environment)?;
        let id = env.add_species(species);
        self.counters.increment(kind);
        self.metrics.increment_counter("registered");
        Ok(id)
    }

    pub fn add_resource(&mut self, env_id: EnvironmentId, resource: Resource) -> Result<ResourceId> {
        let env = self.require_environment(env_id)?;
        Ok(env.add_resource(resource))
    }

    /// Draws a free spot, at least the configured distance from every animal
    /// and resource already placed.
    pub fn place(&mut self) -> Result<Position> {
        let occupied = self.occupied_positions();
        self.placer.generate(&self.bounds, &occupied, &mut self.rng)
    }

    /// Builds an animal from its type label with default traits and a placed
    /// position.
    pub fn spawn_species(
        &mut self,
        label: &str,
        name: &str,
        energy: i32,
        env_id: EnvironmentId,
    ) -> Result<SpeciesId> {
        let kind = SpeciesKind::from_label(label)
            .ok_or_else(|| EcosystemError::unknown_species(label))?;
        self.spawn_with_traits(name, energy, SpeciesTraits::default_for(kind), env_id)
    }

    /// Like [`Ecosystem::spawn_species`] with an explicit trait payload.
    pub fn spawn_with_traits(
        &mut self,
        name: &str,
        energy: i32,
        traits: SpeciesTraits,
        env_id: EnvironmentId,
    ) -> Result<SpeciesId> {
        self.require_environment(env_id)?;
        let position = self.place()?;
        let speed = crate::profile::profile(traits.kind()).default_speed;
        self.add_species(Species::new(name, energy, position, env_id, speed, traits))
    }

    pub fn spawn_resource(
        &mut self,
        label: &str,
        quantity: u32,
        rate: f64,
        env_id: EnvironmentId,
    ) -> Result<ResourceId> {
        let kind = ResourceKind::from_label(label)
            .ok_or_else(|| EcosystemError::unknown_resource(label))?;
        self.require_environment(env_id)?;
        let position = self.place()?;
        self.add_resource(env_id, Resource::new(kind, quantity, position, rate))
    }

    pub fn remove_species(&mut self, id: SpeciesId) -> Removal {
        for env in &mut self.environments {
            if let Removal::Removed(s) = env.remove_species(id) {
                return Removal::Removed(s);
            }
        }
        Removal::NotFound
    }

    /// Breeding check for one registered animal against its kind's counter.
    /// Never creates the offspring; that is up to the caller.
    pub fn reproduce(&mut self, id: SpeciesId) -> bool {
        let Self {
            environments,
            counters,
            metrics,
            ..
        } = self;
        let bred = environments
            .iter()
            .find_map(|e| e.species_by_id(id))
            .is_some_and(|s| s.reproduce(counters));
        if bred {
            metrics.increment_counter("births");
        }
        bred
    }

    /// Flat roster across every environment, in environment order.
    #[must_use]
    pub fn roster(&self) -> Vec<&Species> {
        self.environments
            .iter()
            .flat_map(|e| e.species().iter())
            .collect()
    }

    #[must_use]
    pub fn species(&self, id: SpeciesId) -> Option<&Species> {
        self.environments.iter().find_map(|e| e.species_by_id(id))
    }

    pub fn species_mut(&mut self, id: SpeciesId) -> Option<&mut Species> {
        self.environments
            .iter_mut()
            .find_map(|e| e.species_by_id_mut(id))
    }

    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.environments
            .iter()
            .flat_map(|e| e.positions())
            .collect()
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.environments.iter().map(|e| e.species().len()).sum()
    }

    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.environments.iter().map(|e| e.resources().len()).sum()
    }

    /// Rules, then animals, then seasons.
    pub fn run_cycle(&mut self) -> CycleReport {
        let started = Instant::now();
        self.cycle += 1;
        let mut report = CycleReport {
            cycle: self.cycle,
            rules: systems::environment::apply_rules(&mut self.environments),
            ..Default::default()
        };

        {
            let Self {
                environments,
                counters,
                rng,
                bounds,
                config,
                ..
            } = self;
            let (min, max) = (config.cycle.move_spread_min, config.cycle.move_spread_max);

            for env in environments.iter_mut() {
                let mut dead = Vec::new();
                let (species, _) = env.parts_mut();
                for animal in species.iter_mut() {
                    if animal.is_dead() {
                        dead.push(animal.id);
                        continue;
                    }
                    match animal.travel(Direction::random(rng, min, max), bounds) {
                        MoveOutcome::Moved { died: true, .. } => {
                            dead.push(animal.id);
                            continue;
                        }
                        MoveOutcome::Moved { .. } => report.moved += 1,
                        MoveOutcome::Asleep => report.blocked += 1,
                    }
                    if animal.reproduce(counters) {
                        report.births += 1;
                    }
                }
                for id in dead {
                    if let DeathCheck::Died(s) = env.check_death(id) {
                        report.deaths.push(s.id);
                    }
                }
            }
        }

        report.seasons = systems::environment::advance_seasons(
            &mut self.environments,
            self.config.cycle.season_progression,
        );

        self.metrics.add_to_counter("births", report.births as u64);
        self.metrics
            .add_to_counter("deaths", report.deaths.len() as u64);
        self.metrics.record_cycle(
            started.elapsed(),
            self.population(),
            self.resource_count(),
        );
        tracing::debug!(
            cycle = report.cycle,
            moved = report.moved,
            births = report.births,
            deaths = report.deaths.len(),
            "Cycle complete"
        );
        report
    }

    /// Proximity eat and hunt pass over every environment.
    pub fn resolve_interactions(&mut self) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        for env in &mut self.environments {
            events.extend(systems::interaction::resolve(env, &self.config.interaction));
        }
        for event in &events {
            match event {
                InteractionEvent::Ate { .. } => self.metrics.increment_counter("meals"),
                InteractionEvent::Hunted { .. } => self.metrics.increment_counter("hunts"),
                InteractionEvent::Died { .. } => self.metrics.increment_counter("deaths"),
                InteractionEvent::ResourceDepleted { .. } | InteractionEvent::Missed { .. } => {}
            }
        }
        events
    }

    /// Sets the season in every environment.
    pub fn update_season(&mut self, label: &str) -> Vec<SeasonalEffect> {
        systems::environment::set_season(&mut self.environments, label)
    }

    pub fn regenerate_resources(&mut self) -> u64 {
        self.environments
            .iter_mut()
            .map(Environment::regenerate_resources)
            .sum()
    }

    #[must_use]
    pub fn report(&self) -> EcosystemReport {
        systems::stats::build_report(self.cycle, &self.environments, &self.counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeasonProgression;
    use crate::environment::Season;
    use crate::placement::distance;

    fn seeded() -> Ecosystem {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        Ecosystem::new(config).expect("valid config")
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.world.height = -1;
        assert!(matches!(
            Ecosystem::new(config),
            Err(EcosystemError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_environment() {
        let mut eco = seeded();
        let stray = Species::new(
            "Stray",
            50,
            Position::new(0, 0),
            EnvironmentId::new(),
            10,
            SpeciesTraits::default_for(SpeciesKind::Rabbit),
        );
        assert!(matches!(
            eco.add_species(stray),
            Err(EcosystemError::UnknownEnvironment(_))
        ));
        assert_eq!(eco.counters().get(SpeciesKind::Rabbit), 0);
    }

    #[test]
    fn test_spawn_unknown_labels() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        assert!(matches!(
            eco.spawn_species("Unicorn", "u", 10, forest),
            Err(EcosystemError::UnknownSpecies(_))
        ));
        assert!(matches!(
            eco.spawn_resource("Moss", 10, 0.1, forest),
            Err(EcosystemError::UnknownResource(_))
        ));
        assert!(eco.roster().is_empty());
    }

    #[test]
    fn test_spawned_entities_keep_their_distance() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        for i in 0..20 {
            eco.spawn_species("Rabbit", &format!("Rabbit {i}"), 80, forest)
                .expect("spawn");
            eco.spawn_resource("Grass", 50, 0.1, forest).expect("spawn");
        }
        let positions = eco.occupied_positions();
        assert_eq!(positions.len(), 40);
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(distance(*a, *b) >= 50.0);
            }
        }
        assert_eq!(eco.counters().get(SpeciesKind::Rabbit), 20);
    }

    #[test]
    fn test_cycle_removes_dead_and_resets_to_spring() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        let doomed = eco.spawn_species("Rabbit", "Doomed", 80, forest).expect("spawn");
        let lone = eco.spawn_species("Wolf", "Lone", 100, forest).expect("spawn");
        eco.species_mut(doomed).expect("present").set_energy(0);
        eco.update_season("Winter");

        let report = eco.run_cycle();
        assert_eq!(report.deaths, vec![doomed]);
        assert!(eco.species(doomed).is_none());
        assert_eq!(eco.species(lone).expect("wolf").energy, 92);
        // Only one wolf was ever created, so it cannot breed.
        assert_eq!(report.births, 0);
        assert!(eco
            .environments()
            .iter()
            .all(|e| e.season() == &Season::Spring));
    }

    #[test]
    fn test_cycle_breeds_once_two_exist() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        eco.spawn_species("Wolf", "A", 100, forest).expect("spawn");
        eco.spawn_species("Wolf", "B", 100, forest).expect("spawn");
        let report = eco.run_cycle();
        assert_eq!(report.births, 2);
        assert_eq!(eco.counters().get(SpeciesKind::Wolf), 4);
        assert_eq!(eco.population(), 2);
    }

    #[test]
    fn test_reproduce_by_id() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        let first = eco.spawn_species("Human", "Ada", 100, forest).expect("spawn");
        assert!(!eco.reproduce(first));
        eco.spawn_species("Human", "Bo", 100, forest).expect("spawn");
        assert!(eco.reproduce(first));
        assert_eq!(eco.counters().get(SpeciesKind::Human), 3);
        assert_eq!(eco.population(), 2);
        assert!(!eco.reproduce(SpeciesId::new()));
    }

    #[test]
    fn test_advance_progression() {
        let mut config = AppConfig::default();
        config.world.seed = Some(1);
        config.cycle.season_progression = SeasonProgression::Advance;
        let mut eco = Ecosystem::new(config).expect("valid");
        eco.add_environment(Environment::ocean("Ocean", 35.0));
        eco.run_cycle();
        assert_eq!(eco.environments()[0].season(), &Season::Summer);
        eco.run_cycle();
        assert_eq!(eco.environments()[0].season(), &Season::Autumn);
    }

    #[test]
    fn test_remove_species_reports_missing() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        let id = eco.spawn_species("Bear", "Bruno", 70, forest).expect("spawn");
        assert!(eco.remove_species(id).is_removed());
        assert_eq!(eco.remove_species(id), Removal::NotFound);
    }

    #[test]
    fn test_roster_spans_environments() {
        let mut eco = seeded();
        let forest = eco.add_environment(Environment::forest("Forest", 1.0));
        let ocean = eco.add_environment(Environment::ocean("Ocean", 35.0));
        eco.spawn_species("Rabbit", "r", 50, forest).expect("spawn");
        eco.spawn_species("Shark", "s", 50, ocean).expect("spawn");
        let kinds: Vec<_> = eco.roster().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![SpeciesKind::Rabbit, SpeciesKind::Shark]);
        assert_eq!(eco.report().population(), 2);
    }

    #[test]
    fn test_same_seed_same_world() {
        let build = || {
            let mut eco = seeded();
            let forest = eco.add_environment(Environment::forest("Forest", 1.0));
            for _ in 0..5 {
                eco.spawn_species("Rabbit", "r", 80, forest).expect("spawn");
            }
            eco.run_cycle();
            eco.roster()
                .iter()
                .map(|s| (s.position, s.energy))
                .collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }
}
