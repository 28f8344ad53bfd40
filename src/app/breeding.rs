//! On-demand breeding.
//!
//! The core only answers whether an animal may breed and bumps the counter;
//! building the newborn is the runner's job.

use anyhow::Result;
use ecosim_core::{Ecosystem, EcosystemError, SpeciesLogic};
use ecosim_data::{SpeciesId, SpeciesKind, SpeciesTraits};

/// Starting energy and traits of a newborn of `kind`.
#[must_use]
pub fn offspring_template(kind: SpeciesKind) -> (i32, SpeciesTraits) {
    match kind {
        SpeciesKind::Bear => (
            80,
            SpeciesTraits::Bear {
                strength: 50.0,
                speed_mps: 2.0,
            },
        ),
        SpeciesKind::Wolf => (50, SpeciesTraits::default_for(kind)),
        SpeciesKind::Rabbit => (80, SpeciesTraits::Rabbit { speed_mps: 2.0 }),
        SpeciesKind::Human => (90, SpeciesTraits::Human { defense_power: 30 }),
        SpeciesKind::Canari | SpeciesKind::Crow => (60, SpeciesTraits::default_for(kind)),
        SpeciesKind::HerbivorousFish => (40, SpeciesTraits::default_for(kind)),
        SpeciesKind::Shark => (80, SpeciesTraits::default_for(kind)),
    }
}

/// Picks the first living parent of the kind named by `label`; if it may
/// breed, places a newborn next to it in the same environment.
///
/// Returns `Ok(None)` when there is no parent or the kind cannot breed yet.
pub fn breed(eco: &mut Ecosystem, label: &str) -> Result<Option<SpeciesId>> {
    let kind =
        SpeciesKind::from_label(label).ok_or_else(|| EcosystemError::unknown_species(label))?;

    let Some((parent, env)) = eco
        .roster()
        .into_iter()
        .find(|s| s.kind() == kind && s.is_alive())
        .map(|s| (s.id, s.environment))
    else {
        tracing::info!(%kind, "No parent available");
        return Ok(None);
    };

    if !eco.reproduce(parent) {
        tracing::info!(%kind, count = eco.counters().get(kind), "Not enough animals to breed");
        return Ok(None);
    }

    let living = eco.roster().iter().filter(|s| s.kind() == kind).count();
    let (energy, traits) = offspring_template(kind);
    let id = eco.spawn_with_traits(&format!("{kind}{}", living + 1), energy, traits, env)?;
    tracing::info!(%kind, %id, "Newborn added");
    Ok(Some(id))
}
