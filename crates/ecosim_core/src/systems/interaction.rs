//! Proximity eat and hunt passes over one environment.
//!
//! Matching is first-compatible in roster order, not nearest.

use crate::config::InteractionConfig;
use crate::environment::Environment;
use crate::interaction::InteractionEvent;
use crate::placement::distance;
use crate::resource::ResourceLogic;
use crate::species::{EatOutcome, Food, HuntOutcome, SpeciesLogic};
use ecosim_data::{Family, Species};

/// Runs the eating pass then the hunting pass.
pub fn resolve(env: &mut Environment, config: &InteractionConfig) -> Vec<InteractionEvent> {
    let mut events = eating_pass(env, config.eat_radius);
    events.extend(hunting_pass(env, config.hunt_radius));
    events
}

/// Each live herbivore eats the first acceptable resource strictly inside
/// `radius`, moving onto it. Fully consumed resources are removed.
pub fn eating_pass(env: &mut Environment, radius: f64) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    let (species, resources) = env.parts_mut();

    for animal in species.iter_mut() {
        if animal.family() != Family::Herbivore || animal.is_dead() {
            continue;
        }
        let Some(idx) = resources
            .iter()
            .position(|r| animal.accepts(r) && distance(animal.position, r.position) < radius)
        else {
            continue;
        };

        let target = &mut resources[idx];
        let (resource_id, kind, spot) = (target.id, target.kind, target.position);
        if let EatOutcome::Consumed { gained } = animal.eat(Food::Resource(target)) {
            animal.position = spot;
            events.push(InteractionEvent::Ate {
                eater: animal.id,
                resource: resource_id,
                kind,
                gained,
            });
            if resources[idx].is_consumed() {
                resources.remove(idx);
                events.push(InteractionEvent::ResourceDepleted {
                    resource: resource_id,
                    kind,
                });
            }
        }
    }
    events
}

fn pair_mut(species: &mut [Species], a: usize, b: usize) -> (&mut Species, &mut Species) {
    if a < b {
        let (left, right) = species.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = species.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Each live carnivore hunts the first live herbivore strictly inside
/// `radius`. A successful predator moves onto its prey's spot; prey left
/// with no energy is removed.
pub fn hunting_pass(env: &mut Environment, radius: f64) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    let (species, _) = env.parts_mut();

    let mut i = 0;
    while i < species.len() {
        let predator = &species[i];
        if predator.family() != Family::Carnivore || predator.is_dead() {
            i += 1;
            continue;
        }
        let found = species.iter().enumerate().position(|(j, s)| {
            j != i
                && s.family() == Family::Herbivore
                && s.is_alive()
                && distance(predator.position, s.position) < radius
        });
        let Some(j) = found else {
            i += 1;
            continue;
        };

        let (predator, prey) = pair_mut(species, i, j);
        let spot = prey.position;
        match predator.hunt(prey) {
            HuntOutcome::Struck(outcome) => {
                predator.position = spot;
                events.push(InteractionEvent::Hunted {
                    predator: predator.id,
                    prey: prey.id,
                    outcome,
                });
                if prey.is_dead() {
                    let dead = species.remove(j);
                    tracing::info!(name = %dead.name, kind = %dead.kind(), "Killed by predator");
                    events.push(InteractionEvent::Died {
                        species: dead.id,
                        kind: dead.kind(),
                    });
                    if j < i {
                        i -= 1;
                    }
                }
            }
            HuntOutcome::OutOfReach | HuntOutcome::NotAPredator => {
                tracing::debug!(predator = %predator.name, prey = %prey.name, "Hunt missed");
                events.push(InteractionEvent::Missed {
                    predator: predator.id,
                    prey: prey.id,
                });
            }
        }
        i += 1;
    }
    events
}
