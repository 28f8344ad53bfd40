mod common;

use common::{animal, resource, EcosystemBuilder};
use ecosim_lib::model::entity::{Position, SpeciesKind};
use ecosim_lib::model::environment::Environment;
use ecosim_lib::model::interaction::InteractionEvent;
use ecosim_lib::model::resource::ResourceKind;

fn forest() -> ecosim_lib::model::ecosystem::Ecosystem {
    EcosystemBuilder::new()
        .with_environment(Environment::forest("Forest", 1.0))
        .build()
}

#[test]
fn test_rabbit_grazes_and_moves_onto_grass() {
    let mut eco = forest();
    let env = eco.environments()[0].id();
    let rabbit = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 50, 100, 100))
        .expect("forest exists");
    eco.add_resource(env, resource(ResourceKind::Grass, 50, 150, 100))
        .expect("forest exists");

    let events = eco.resolve_interactions();
    assert!(matches!(events[0], InteractionEvent::Ate { gained: 20, .. }));
    assert_energy!(eco, rabbit, 70);
    assert_eq!(
        eco.species(rabbit).expect("rabbit").position,
        Position::new(150, 100)
    );
    assert_eq!(eco.environments()[0].resources()[0].quantity, 30);
    assert_eq!(eco.metrics().counter("meals"), 1);
}

#[test]
fn test_grass_eaten_down_is_removed() {
    let mut eco = forest();
    let env = eco.environments()[0].id();
    eco.add_species(animal(&eco, 0, SpeciesKind::Rabbit, 50, 100, 100))
        .expect("forest exists");
    eco.add_resource(env, resource(ResourceKind::Grass, 15, 110, 100))
        .expect("forest exists");

    let events = eco.resolve_interactions();
    assert!(events
        .iter()
        .any(|e| matches!(e, InteractionEvent::ResourceDepleted { .. })));
    assert_eq!(eco.resource_count(), 0);
}

#[test]
fn test_wolf_kills_weak_rabbit() {
    let mut eco = forest();
    let rabbit = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 20, 150, 100))
        .expect("forest exists");
    let wolf = eco
        .add_species(animal(&eco, 0, SpeciesKind::Wolf, 100, 100, 100))
        .expect("forest exists");

    let events = eco.resolve_interactions();
    assert!(events.iter().any(InteractionEvent::is_death));
    assert_species_removed!(eco, rabbit);
    assert_energy!(eco, wolf, 120);
    assert_population!(eco, 1);
    assert_eq!(eco.metrics().counter("deaths"), 1);
}

#[test]
fn test_strong_rabbit_survives_a_bite() {
    let mut eco = forest();
    let rabbit = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 50, 150, 100))
        .expect("forest exists");
    let wolf = eco
        .add_species(animal(&eco, 0, SpeciesKind::Wolf, 100, 100, 100))
        .expect("forest exists");

    eco.resolve_interactions();
    assert_energy!(eco, rabbit, 20);
    assert_energy!(eco, wolf, 130);
    assert_population!(eco, 2);
}

#[test]
fn test_shark_catches_fish_within_its_reach() {
    let mut eco = EcosystemBuilder::new()
        .with_environment(Environment::ocean("Ocean", 35.0))
        .build();
    let fish = eco
        .add_species(animal(&eco, 0, SpeciesKind::HerbivorousFish, 30, 103, 100))
        .expect("ocean exists");
    let shark = eco
        .add_species(animal(&eco, 0, SpeciesKind::Shark, 100, 100, 100))
        .expect("ocean exists");

    eco.resolve_interactions();
    assert_species_removed!(eco, fish);
    assert_energy!(eco, shark, 130);
    assert_eq!(
        eco.species(shark).expect("shark").position,
        Position::new(103, 100)
    );
}

#[test]
fn test_environments_do_not_interact() {
    let mut eco = EcosystemBuilder::new()
        .with_environment(Environment::forest("Forest", 1.0))
        .with_environment(Environment::air("Air", 20.0))
        .build();
    let rabbit = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 20, 100, 100))
        .expect("forest exists");
    eco.add_species(animal(&eco, 1, SpeciesKind::Wolf, 100, 100, 100))
        .expect("air exists");

    assert!(eco.resolve_interactions().is_empty());
    assert_energy!(eco, rabbit, 20);
}
