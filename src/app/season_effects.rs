//! Forest-wide effects of picking a season by hand.
//!
//! They run after the core has applied the season's flat resource step and
//! only touch the forest.

use anyhow::Result;
use ecosim_core::environment::Season;
use ecosim_core::Ecosystem;
use ecosim_data::{EnvironmentId, SpeciesId};
use rand::Rng;

use super::breeding;

pub const BREEDING_CHANCE: f64 = 0.5;

/// Energy factor, resource factor and breeding attempts of one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonMultipliers {
    pub energy: f64,
    pub resources: f64,
    pub breeding: Option<(&'static str, u32)>,
}

impl SeasonMultipliers {
    #[must_use]
    pub fn for_season(season: &Season) -> Option<Self> {
        let multipliers = match season {
            Season::Winter => Self {
                energy: 0.8,
                resources: 0.5,
                breeding: None,
            },
            Season::Spring => Self {
                energy: 1.0,
                resources: 1.5,
                breeding: Some(("Rabbit", 2)),
            },
            Season::Summer => Self {
                energy: 1.2,
                resources: 1.0,
                breeding: Some(("Wolf", 1)),
            },
            Season::Autumn => Self {
                energy: 1.0,
                resources: 1.2,
                breeding: None,
            },
            Season::Unrecognized(_) => return None,
        };
        Some(multipliers)
    }
}

/// Applies the multipliers for `label` to `forest` and rolls the season's
/// breeding attempts. Returns the newborns.
pub fn apply(eco: &mut Ecosystem, forest: EnvironmentId, label: &str) -> Result<Vec<SpeciesId>> {
    let Some(multipliers) = SeasonMultipliers::for_season(&Season::parse(label)) else {
        return Ok(Vec::new());
    };

    if let Some(env) = eco.environment_mut(forest) {
        if multipliers.energy != 1.0 {
            env.scale_species_energy(multipliers.energy);
        }
        if multipliers.resources != 1.0 {
            env.scale_resources(multipliers.resources);
        }
    }

    let mut born = Vec::new();
    if let Some((kind, attempts)) = multipliers.breeding {
        for _ in 0..attempts {
            if eco.rng_mut().gen_bool(BREEDING_CHANCE) {
                born.extend(breeding::breed(eco, kind)?);
            }
        }
    }
    tracing::info!(season = label, births = born.len(), "Seasonal effects applied");
    Ok(born)
}
