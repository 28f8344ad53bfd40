//! Initial world: one forest, one ocean and one sky, populated from the
//! `[population]` section of the configuration.

use ecosim_core::config::PopulationConfig;
use ecosim_core::environment::Environment;
use ecosim_core::Ecosystem;
use ecosim_data::{EnvironmentId, SpeciesTraits};

pub const FOREST_TREE_DENSITY: f64 = 0.9;
pub const OCEAN_SALINITY: f64 = 35.0;
pub const AIR_WIND_SPEED: f64 = 20.0;

/// Starting quantity and per-instance rate of each resource kind.
pub const GRASS: (u32, f64) = (50, 0.2);
pub const FRUITS: (u32, f64) = (50, 0.15);
pub const ALGAE: (u32, f64) = (200, 0.3);

#[derive(Debug, Clone, Copy)]
pub struct Habitats {
    pub forest: EnvironmentId,
    pub ocean: EnvironmentId,
    pub air: EnvironmentId,
}

/// Adds the three environments and everything that starts in them.
pub fn populate(eco: &mut Ecosystem) -> ecosim_core::Result<Habitats> {
    let habitats = Habitats {
        forest: eco.add_environment(Environment::forest("Forest", FOREST_TREE_DENSITY)),
        ocean: eco.add_environment(Environment::ocean("Ocean", OCEAN_SALINITY)),
        air: eco.add_environment(Environment::air("Air", AIR_WIND_SPEED)),
    };
    let counts: PopulationConfig = eco.config().population.clone();

    let animals: [(&str, usize, i32, SpeciesTraits, EnvironmentId); 8] = [
        ("Rabbit", counts.rabbits, 80, SpeciesTraits::Rabbit { speed_mps: 2.0 }, habitats.forest),
        (
            "Wolf",
            counts.wolves,
            100,
            SpeciesTraits::Wolf {
                attack_strength: 30,
                pack_instinct: true,
            },
            habitats.forest,
        ),
        ("Human", counts.humans, 100, SpeciesTraits::Human { defense_power: 5 }, habitats.forest),
        (
            "Bear",
            counts.bears,
            70,
            SpeciesTraits::Bear {
                strength: 20.0,
                speed_mps: 5.0,
            },
            habitats.forest,
        ),
        (
            "HerbivorousFish",
            counts.fish,
            40,
            SpeciesTraits::HerbivorousFish { swim_speed: 3.0 },
            habitats.ocean,
        ),
        (
            "Shark",
            counts.sharks,
            100,
            SpeciesTraits::Shark {
                attack_strength: 50,
                swim_speed: 5.0,
            },
            habitats.ocean,
        ),
        (
            "Canari",
            counts.canaris,
            30,
            SpeciesTraits::Canari {
                feather_color: "Yellow".to_string(),
            },
            habitats.air,
        ),
        (
            "Crow",
            counts.crows,
            60,
            SpeciesTraits::Crow {
                feather_color: "Black".to_string(),
            },
            habitats.air,
        ),
    ];

    for (label, count, energy, traits, env) in animals {
        let place = environment_name(eco, env);
        for i in 0..count {
            eco.spawn_with_traits(&format!("{label}{}", i + 1), energy, traits.clone(), env)
                .map_err(|e| e.with_context(format!("Spawning {label} in {place}")))?;
        }
    }

    let resources = [
        ("Grass", counts.grass, GRASS, habitats.forest),
        ("Fruits", counts.fruits, FRUITS, habitats.forest),
        ("Algae", counts.algae, ALGAE, habitats.ocean),
    ];
    for (label, count, (quantity, rate), env) in resources {
        let place = environment_name(eco, env);
        for _ in 0..count {
            eco.spawn_resource(label, quantity, rate, env)
                .map_err(|e| e.with_context(format!("Spawning {label} in {place}")))?;
        }
    }

    tracing::info!(
        population = eco.population(),
        resources = eco.resource_count(),
        "World populated"
    );
    Ok(habitats)
}

fn environment_name(eco: &Ecosystem, id: EnvironmentId) -> String {
    eco.environment(id)
        .map_or_else(|| id.to_string(), |env| env.name().to_string())
}
