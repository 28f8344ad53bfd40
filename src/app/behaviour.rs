//! Per-tick behaviour the core leaves to the runner: naps, predator
//! alerts and humans tending the animals around them.
//!
//! Runs after the cycle and the eat/hunt pass, one environment at a time.

use ecosim_core::environment::Removal;
use ecosim_core::placement::distance;
use ecosim_core::species::{Encounter, PredatorEncounter};
use ecosim_core::{Ecosystem, SpeciesLogic};
use ecosim_data::{Family, Species, SpeciesId, SpeciesKind};
use serde::Serialize;

/// Awake animals below this energy take a nap.
pub const NAP_BELOW: i32 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BehaviourReport {
    pub woke: usize,
    pub slept: usize,
    /// Awake prey that spotted a predator and fled.
    pub fled: usize,
    /// Sleeping prey that woke up and got away.
    pub escaped: usize,
    /// Sleeping prey taken by surprise and removed.
    pub caught: Vec<SpeciesId>,
    /// Herbivores fed by a human.
    pub fed: usize,
}

/// Wakes last tick's sleepers, then sends tired animals to sleep.
pub fn naps(eco: &mut Ecosystem, report: &mut BehaviourReport) {
    let snapshot: Vec<(SpeciesId, bool, i32)> = eco
        .roster()
        .into_iter()
        .map(|s| (s.id, s.sleeping, s.energy))
        .collect();
    for (id, sleeping, energy) in snapshot {
        let Some(animal) = eco.species_mut(id) else {
            continue;
        };
        if sleeping {
            if animal.wake_up() {
                report.woke += 1;
            }
        } else if animal.is_alive() && energy < NAP_BELOW && animal.sleep() {
            report.slept += 1;
        }
    }
}

/// Every prey animal with a live carnivore inside `radius` reacts to it:
/// a sleeper is surprised, an awake one may spot it and flee.
pub fn predator_alerts(eco: &mut Ecosystem, radius: f64, report: &mut BehaviourReport) {
    let bounds = *eco.bounds();
    let pairs: Vec<(SpeciesId, Species)> = eco
        .environments()
        .iter()
        .flat_map(|env| {
            let members = env.species();
            members.iter().filter_map(move |prey| {
                if prey.is_dead() || prey.profile().detection_chance.is_none() {
                    return None;
                }
                members
                    .iter()
                    .find(|p| {
                        p.family() == Family::Carnivore
                            && p.is_alive()
                            && distance(p.position, prey.position) < radius
                    })
                    .map(|predator| (prey.id, predator.clone()))
            })
        })
        .collect();

    let mut rng = eco.rng_mut().clone();
    for (prey_id, predator) in pairs {
        let Some(prey) = eco.species_mut(prey_id) else {
            continue;
        };
        if prey.is_sleeping() {
            match prey.handle_predator_attack(&predator, &bounds) {
                PredatorEncounter::Escaped { to } => {
                    tracing::debug!(prey = %prey.name, %to, "Woke up and escaped");
                    report.escaped += 1;
                }
                PredatorEncounter::Caught => {
                    if let Removal::Removed(dead) = eco.remove_species(prey_id) {
                        tracing::info!(
                            name = %dead.name,
                            predator = %predator.name,
                            "Caught asleep"
                        );
                        report.caught.push(prey_id);
                    }
                }
                PredatorEncounter::Alert => {}
            }
        } else if prey.detect_predator(&mut rng) {
            report.fled += 1;
        }
    }
    *eco.rng_mut() = rng;
}

/// Each human meets every other animal inside `radius`.
pub fn human_encounters(eco: &mut Ecosystem, radius: f64, report: &mut BehaviourReport) {
    let meetings: Vec<(Species, SpeciesId)> = eco
        .environments()
        .iter()
        .flat_map(|env| {
            let members = env.species();
            members
                .iter()
                .filter(|h| h.kind() == SpeciesKind::Human && h.is_alive())
                .flat_map(move |human| {
                    members
                        .iter()
                        .filter(move |o| {
                            o.id != human.id && distance(human.position, o.position) < radius
                        })
                        .map(move |o| (human.clone(), o.id))
                })
        })
        .collect();

    for (human, other_id) in meetings {
        if let Some(other) = eco.species_mut(other_id) {
            if human.interact_with(other) == Encounter::Fed {
                report.fed += 1;
            }
        }
    }
}

/// Naps, then predator alerts, then human encounters.
pub fn run(eco: &mut Ecosystem) -> BehaviourReport {
    let mut report = BehaviourReport::default();
    let config = eco.config().interaction.clone();
    naps(eco, &mut report);
    predator_alerts(eco, config.hunt_radius, &mut report);
    human_encounters(eco, config.eat_radius, &mut report);
    tracing::debug!(
        slept = report.slept,
        fled = report.fled,
        caught = report.caught.len(),
        fed = report.fed,
        "Behaviour pass complete"
    );
    report
}
