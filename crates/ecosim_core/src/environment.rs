//! Environments: named containers of species and resources.
//!
//! An environment is the authoritative owner of the animals living in it.
//! Seasons move every resource quantity by a fixed step, and each habitat
//! keeps one scalar (tree density, salinity or wind speed) that is recomputed
//! from its current membership.

use crate::resource::ResourceLogic;
use crate::species::SpeciesLogic;
use ecosim_data::{
    EnvironmentId, Family, Position, Resource, ResourceId, Species, SpeciesId, SpeciesKind,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
    /// Any other label. Stored as given, with no effect on resources.
    Unrecognized(String),
}

impl Season {
    /// Case-sensitive. Never fails.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Spring" => Season::Spring,
            "Summer" => Season::Summer,
            "Autumn" => Season::Autumn,
            "Winter" => Season::Winter,
            other => Season::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Unrecognized(label) => label,
        }
    }

    /// Change applied to every resource quantity when the season is set.
    #[must_use]
    pub fn resource_delta(&self) -> i32 {
        match self {
            Season::Spring => 10,
            Season::Summer => 5,
            Season::Autumn => -5,
            Season::Winter => -10,
            Season::Unrecognized(_) => 0,
        }
    }

    /// Unrecognized labels restart the cycle at Spring.
    #[must_use]
    pub fn next(&self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter | Season::Unrecognized(_) => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Habitat variant and its membership-dependent scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Habitat {
    Forest { tree_density: f64 },
    Ocean { salinity: f64 },
    Air { wind_speed: f64 },
}

impl Habitat {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Habitat::Forest { .. } => "Forest",
            Habitat::Ocean { .. } => "Ocean",
            Habitat::Air { .. } => "Air",
        }
    }

    #[must_use]
    pub fn scalar(&self) -> f64 {
        match *self {
            Habitat::Forest { tree_density } => tree_density,
            Habitat::Ocean { salinity } => salinity,
            Habitat::Air { wind_speed } => wind_speed,
        }
    }

    fn set_scalar(&mut self, value: f64) {
        match self {
            Habitat::Forest { tree_density } => *tree_density = value,
            Habitat::Ocean { salinity } => *salinity = value,
            Habitat::Air { wind_speed } => *wind_speed = value,
        }
    }

    /// Whether `kind` shifts this habitat's scalar.
    #[must_use]
    pub fn is_affected_by(&self, kind: SpeciesKind) -> bool {
        match self {
            Habitat::Forest { .. } => kind.family() == Family::Herbivore,
            Habitat::Ocean { .. } => kind == SpeciesKind::HerbivorousFish,
            Habitat::Air { .. } => kind.is_flying(),
        }
    }

    /// Scalar change contributed by each counted animal.
    #[must_use]
    pub fn per_member_shift(&self) -> f64 {
        match self {
            Habitat::Forest { .. } => -0.01,
            Habitat::Ocean { .. } => -0.1,
            Habitat::Air { .. } => 0.5,
        }
    }

    #[must_use]
    pub fn narrative(&self, season: &Season) -> Option<&'static str> {
        let line = match (self, season) {
            (Habitat::Forest { .. }, Season::Spring) => "The forest blooms and new shoots appear",
            (Habitat::Forest { .. }, Season::Summer) => "Trees are heavy with fruit",
            (Habitat::Forest { .. }, Season::Autumn) => "Falling leaves limit the food on offer",
            (Habitat::Forest { .. }, Season::Winter) => "Bare trees give little shelter",
            (Habitat::Ocean { .. }, Season::Spring) => "Algae proliferate in the warming water",
            (Habitat::Ocean { .. }, Season::Summer) => "The ocean reaches its peak productivity",
            (Habitat::Ocean { .. }, Season::Autumn) => "Storms stir the water and scatter the shoals",
            (Habitat::Ocean { .. }, Season::Winter) => "Cold water slows marine reproduction",
            (Habitat::Air { .. }, Season::Spring) => "Migratory birds return",
            (Habitat::Air { .. }, Season::Summer) => "Warm thermals carry the birds",
            (Habitat::Air { .. }, Season::Autumn) => "Strong winds make flying hard",
            (Habitat::Air { .. }, Season::Winter) => "Winter storms ground the birds",
            (_, Season::Unrecognized(_)) => return None,
        };
        Some(line)
    }
}

/// Result of removing an animal by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(Species),
    NotFound,
}

impl Removal {
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }
}

/// Result of the death check on one animal.
#[derive(Debug, Clone, PartialEq)]
pub enum DeathCheck {
    Alive,
    /// Energy was at or below zero; the animal has been taken out.
    Died(Species),
    /// No animal with that id lives here (already removed, or never added).
    Absent,
}

/// Report of one season change in one environment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalEffect {
    pub environment: EnvironmentId,
    pub season: Season,
    pub delta: i32,
    pub resources: usize,
    pub narrative: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Environment {
    id: EnvironmentId,
    name: String,
    habitat: Habitat,
    baseline: f64,
    species: Vec<Species>,
    resources: Vec<Resource>,
    season: Season,
}

impl Environment {
    #[must_use]
    pub fn new(name: impl Into<String>, habitat: Habitat) -> Self {
        Self {
            id: EnvironmentId::new(),
            name: name.into(),
            baseline: habitat.scalar(),
            habitat,
            species: Vec::new(),
            resources: Vec::new(),
            season: Season::Spring,
        }
    }

    #[must_use]
    pub fn forest(name: impl Into<String>, tree_density: f64) -> Self {
        Self::new(name, Habitat::Forest { tree_density })
    }

    #[must_use]
    pub fn ocean(name: impl Into<String>, salinity: f64) -> Self {
        Self::new(name, Habitat::Ocean { salinity })
    }

    #[must_use]
    pub fn air(name: impl Into<String>, wind_speed: f64) -> Self {
        Self::new(name, Habitat::Air { wind_speed })
    }

    #[must_use]
    pub fn id(&self) -> EnvironmentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn habitat(&self) -> &Habitat {
        &self.habitat
    }

    #[must_use]
    pub fn scalar(&self) -> f64 {
        self.habitat.scalar()
    }

    #[must_use]
    pub fn season(&self) -> &Season {
        &self.season
    }

    #[must_use]
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn species_by_id(&self, id: SpeciesId) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    pub fn species_by_id_mut(&mut self, id: SpeciesId) -> Option<&mut Species> {
        self.species.iter_mut().find(|s| s.id == id)
    }

    #[must_use]
    pub fn count_of(&self, kind: SpeciesKind) -> usize {
        self.species.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.species
            .iter()
            .map(|s| s.position)
            .chain(self.resources.iter().map(|r| r.position))
    }

    /// Takes ownership of `species` and points its back-reference here.
    pub fn add_species(&mut self, mut species: Species) -> SpeciesId {
        species.environment = self.id;
        let id = species.id;
        tracing::info!(
            environment = %self.name,
            name = %species.name,
            kind = %species.kind(),
            "Species added"
        );
        self.species.push(species);
        id
    }

    pub fn remove_species(&mut self, id: SpeciesId) -> Removal {
        match self.species.iter().position(|s| s.id == id) {
            Some(idx) => {
                let removed = self.species.remove(idx);
                tracing::info!(environment = %self.name, name = %removed.name, "Species removed");
                Removal::Removed(removed)
            }
            None => {
                tracing::debug!(environment = %self.name, %id, "Species not found");
                Removal::NotFound
            }
        }
    }

    /// Removes the animal if its energy is at or below zero. Safe to call
    /// repeatedly: once removed, later calls report `Absent`.
    pub fn check_death(&mut self, id: SpeciesId) -> DeathCheck {
        match self.species_by_id(id).map(SpeciesLogic::is_alive) {
            None => DeathCheck::Absent,
            Some(true) => DeathCheck::Alive,
            Some(false) => match self.remove_species(id) {
                Removal::Removed(dead) => {
                    tracing::info!(name = %dead.name, kind = %dead.kind(), "Died");
                    DeathCheck::Died(dead)
                }
                Removal::NotFound => DeathCheck::Absent,
            },
        }
    }

    /// Removes every dead animal, returning them in roster order.
    pub fn remove_dead(&mut self) -> Vec<Species> {
        let dead_ids: Vec<SpeciesId> = self
            .species
            .iter()
            .filter(|s| s.is_dead())
            .map(|s| s.id)
            .collect();
        dead_ids
            .into_iter()
            .filter_map(|id| match self.check_death(id) {
                DeathCheck::Died(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn add_resource(&mut self, resource: Resource) -> ResourceId {
        let id = resource.id;
        tracing::debug!(
            environment = %self.name,
            kind = %resource.kind,
            quantity = resource.quantity,
            "Resource added"
        );
        self.resources.push(resource);
        id
    }

    pub fn remove_resource(&mut self, id: ResourceId) -> Option<Resource> {
        let idx = self.resources.iter().position(|r| r.id == id)?;
        Some(self.resources.remove(idx))
    }

    /// Sets the season and applies its step to every resource.
    pub fn update_season(&mut self, label: &str) -> SeasonalEffect {
        let season = Season::parse(label);
        let delta = season.resource_delta();
        for resource in &mut self.resources {
            resource.quantity = if delta >= 0 {
                resource.quantity.saturating_add(delta.unsigned_abs())
            } else {
                resource.quantity.saturating_sub(delta.unsigned_abs())
            };
        }
        let narrative = self.habitat.narrative(&season);
        match narrative {
            Some(line) => tracing::info!(
                environment = %self.name,
                season = %season,
                delta,
                "{line}"
            ),
            None => tracing::info!(
                environment = %self.name,
                season = %season,
                "Unrecognized season, resources unchanged"
            ),
        }
        self.season = season.clone();
        SeasonalEffect {
            environment: self.id,
            season,
            delta,
            resources: self.resources.len(),
            narrative,
        }
    }

    /// Recomputes the habitat scalar from the baseline and the animals that
    /// affect it. Repeating it without membership changes is a no-op.
    pub fn apply_rules(&mut self) -> f64 {
        let counted = self
            .species
            .iter()
            .filter(|s| self.habitat.is_affected_by(s.kind()))
            .count();
        let value = (self.baseline + self.habitat.per_member_shift() * counted as f64).max(0.0);
        self.habitat.set_scalar(value);
        tracing::debug!(
            environment = %self.name,
            habitat = self.habitat.label(),
            counted,
            value,
            "Environment rules applied"
        );
        value
    }

    /// Regenerates every resource. Returns the total added.
    pub fn regenerate_resources(&mut self) -> u64 {
        self.resources
            .iter_mut()
            .map(|r| u64::from(r.regenerate()))
            .sum()
    }

    /// Multiplies every member's energy by `factor`, truncating and
    /// flooring at zero.
    pub fn scale_species_energy(&mut self, factor: f64) {
        for animal in &mut self.species {
            animal.set_energy((f64::from(animal.energy) * factor) as i32);
        }
        tracing::debug!(environment = %self.name, factor, "Species energy scaled");
    }

    /// Multiplies every resource quantity by `factor`, truncating.
    pub fn scale_resources(&mut self, factor: f64) {
        for resource in &mut self.resources {
            resource.quantity = (f64::from(resource.quantity) * factor) as u32;
        }
        tracing::debug!(environment = %self.name, factor, "Resources scaled");
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<Species>, &mut Vec<Resource>) {
        (&mut self.species, &mut self.resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosim_data::{ResourceKind, SpeciesTraits};

    fn animal(kind: SpeciesKind, energy: i32) -> Species {
        Species::new(
            kind.label(),
            energy,
            Position::new(0, 0),
            EnvironmentId::new(),
            10,
            SpeciesTraits::default_for(kind),
        )
    }

    fn grass(quantity: u32) -> Resource {
        Resource::new(ResourceKind::Grass, quantity, Position::new(10, 10), 0.1)
    }

    #[test]
    fn test_season_parse_is_case_sensitive() {
        assert_eq!(Season::parse("Winter"), Season::Winter);
        assert_eq!(
            Season::parse("winter"),
            Season::Unrecognized("winter".to_string())
        );
        assert_eq!(Season::Winter.next(), Season::Spring);
        assert_eq!(Season::parse("Monsoon").next(), Season::Spring);
    }

    #[test]
    fn test_spring_adds_ten() {
        let mut forest = Environment::forest("Forest", 1.0);
        let id = forest.add_resource(grass(50));
        let effect = forest.update_season("Spring");
        assert_eq!(effect.delta, 10);
        assert!(effect.narrative.is_some());
        assert_eq!(forest.resources()[0].id, id);
        assert_eq!(forest.resources()[0].quantity, 60);
    }

    #[test]
    fn test_winter_floors_at_zero() {
        let mut forest = Environment::forest("Forest", 1.0);
        forest.add_resource(grass(5));
        forest.update_season("Winter");
        assert_eq!(forest.resources()[0].quantity, 0);
        assert_eq!(forest.season(), &Season::Winter);
    }

    #[test]
    fn test_summer_and_autumn_steps() {
        let mut ocean = Environment::ocean("Ocean", 35.0);
        ocean.add_resource(grass(50));
        ocean.update_season("Summer");
        assert_eq!(ocean.resources()[0].quantity, 55);
        ocean.update_season("Autumn");
        assert_eq!(ocean.resources()[0].quantity, 50);
    }

    #[test]
    fn test_unknown_season_changes_nothing() {
        let mut air = Environment::air("Air", 3.0);
        air.add_resource(grass(50));
        let effect = air.update_season("spring");
        assert_eq!(effect.delta, 0);
        assert_eq!(effect.narrative, None);
        assert_eq!(air.resources()[0].quantity, 50);
        assert_eq!(air.season().label(), "spring");
    }

    #[test]
    fn test_add_species_sets_back_reference() {
        let mut forest = Environment::forest("Forest", 1.0);
        let id = forest.add_species(animal(SpeciesKind::Rabbit, 50));
        let stored = forest.species_by_id(id).expect("stored");
        assert_eq!(stored.environment, forest.id());
    }

    #[test]
    fn test_remove_species() {
        let mut forest = Environment::forest("Forest", 1.0);
        let id = forest.add_species(animal(SpeciesKind::Rabbit, 50));
        assert!(forest.remove_species(id).is_removed());
        assert_eq!(forest.remove_species(id), Removal::NotFound);
        assert!(forest.species().is_empty());
    }

    #[test]
    fn test_check_death_removes_exactly_once() {
        let mut forest = Environment::forest("Forest", 1.0);
        let id = forest.add_species(animal(SpeciesKind::Rabbit, 50));
        assert_eq!(forest.check_death(id), DeathCheck::Alive);

        let dead = forest
            .species_by_id_mut(id)
            .expect("present")
            .reduce_energy(50);
        assert!(dead);
        assert!(matches!(forest.check_death(id), DeathCheck::Died(_)));
        assert_eq!(forest.check_death(id), DeathCheck::Absent);
        assert!(forest.species().is_empty());
    }

    #[test]
    fn test_remove_dead_keeps_living() {
        let mut forest = Environment::forest("Forest", 1.0);
        forest.add_species(animal(SpeciesKind::Rabbit, 0));
        let alive = forest.add_species(animal(SpeciesKind::Wolf, 10));
        let dead = forest.remove_dead();
        assert_eq!(dead.len(), 1);
        assert_eq!(forest.species().len(), 1);
        assert!(forest.species_by_id(alive).is_some());
    }

    #[test]
    fn test_forest_rule_counts_herbivores() {
        let mut forest = Environment::forest("Forest", 1.0);
        for _ in 0..10 {
            forest.add_species(animal(SpeciesKind::Rabbit, 50));
        }
        forest.add_species(animal(SpeciesKind::Wolf, 50));
        let value = forest.apply_rules();
        assert!((value - 0.9).abs() < 1e-9);
        let again = forest.apply_rules();
        assert!((again - value).abs() < 1e-12);
    }

    #[test]
    fn test_ocean_rule_counts_marine_herbivores() {
        let mut ocean = Environment::ocean("Ocean", 35.0);
        for _ in 0..5 {
            ocean.add_species(animal(SpeciesKind::HerbivorousFish, 50));
        }
        ocean.add_species(animal(SpeciesKind::Shark, 50));
        assert!((ocean.apply_rules() - 34.5).abs() < 1e-9);
    }

    #[test]
    fn test_air_rule_counts_flyers() {
        let mut air = Environment::air("Air", 3.0);
        air.add_species(animal(SpeciesKind::Canari, 50));
        air.add_species(animal(SpeciesKind::Crow, 50));
        air.add_species(animal(SpeciesKind::Human, 50));
        assert!((air.apply_rules() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_scalar_never_negative() {
        let mut forest = Environment::forest("Forest", 0.01);
        for _ in 0..5 {
            forest.add_species(animal(SpeciesKind::Rabbit, 50));
        }
        assert_eq!(forest.apply_rules(), 0.0);
    }

    #[test]
    fn test_regenerate_resources() {
        let mut forest = Environment::forest("Forest", 1.0);
        forest.add_resource(grass(50));
        forest.add_resource(grass(100));
        assert_eq!(forest.regenerate_resources(), 15);
    }

    #[test]
    fn test_scaling_truncates() {
        let mut forest = Environment::forest("Forest", 1.0);
        let rabbit = forest.add_species(animal(SpeciesKind::Rabbit, 70));
        forest.add_resource(grass(45));

        forest.scale_species_energy(0.8);
        forest.scale_resources(1.2);
        assert_eq!(forest.species_by_id(rabbit).map(|s| s.energy), Some(56));
        assert_eq!(forest.resources()[0].quantity, 54);

        forest.scale_resources(0.5);
        assert_eq!(forest.resources()[0].quantity, 27);
    }
}
