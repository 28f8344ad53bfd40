mod common;

use common::{animal, EcosystemBuilder};
use ecosim_lib::model::entity::SpeciesKind;
use ecosim_lib::model::environment::{Environment, Removal};
use ecosim_lib::model::SpeciesLogic;

fn forest() -> ecosim_lib::model::ecosystem::Ecosystem {
    EcosystemBuilder::new()
        .with_environment(Environment::forest("Forest", 1.0))
        .build()
}

#[test]
fn test_dead_animal_is_removed_once() {
    let mut eco = forest();
    let doomed = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 50, 100, 100))
        .expect("forest exists");
    eco.species_mut(doomed).expect("rabbit").reduce_energy(60);

    let first = eco.run_cycle();
    assert_eq!(first.deaths, vec![doomed]);
    assert_species_removed!(eco, doomed);

    let second = eco.run_cycle();
    assert!(second.deaths.is_empty());
    assert_eq!(eco.counters().get(SpeciesKind::Rabbit), 1);
}

#[test]
fn test_movement_costs_energy() {
    let mut eco = forest();
    let bear = eco
        .add_species(animal(&eco, 0, SpeciesKind::Bear, 100, 500, 400))
        .expect("forest exists");
    let report = eco.run_cycle();
    assert_eq!(report.moved, 1);
    assert_energy!(eco, bear, 90);
    let position = eco.species(bear).expect("bear").position;
    assert!(eco.bounds().contains(position));
}

#[test]
fn test_sleeping_bird_stays_put() {
    let mut eco = EcosystemBuilder::new()
        .with_environment(Environment::air("Air", 20.0))
        .build();
    let canari = eco
        .add_species(animal(&eco, 0, SpeciesKind::Canari, 50, 200, 200))
        .expect("air exists");
    assert!(eco.species_mut(canari).expect("canari").sleep());

    let report = eco.run_cycle();
    assert_eq!(report.blocked, 1);
    assert_energy!(eco, canari, 65);
}

#[test]
fn test_lone_animal_cannot_reproduce() {
    let mut eco = forest();
    let wolf = eco
        .add_species(animal(&eco, 0, SpeciesKind::Wolf, 100, 100, 100))
        .expect("forest exists");
    assert!(!eco.reproduce(wolf));
    assert_eq!(eco.counters().get(SpeciesKind::Wolf), 1);
}

#[test]
fn test_pair_reproduces_and_counter_grows() {
    let mut eco = forest();
    let wolf = eco
        .add_species(animal(&eco, 0, SpeciesKind::Wolf, 100, 100, 100))
        .expect("forest exists");
    eco.add_species(animal(&eco, 0, SpeciesKind::Wolf, 100, 300, 300))
        .expect("forest exists");

    assert!(eco.reproduce(wolf));
    assert_eq!(eco.counters().get(SpeciesKind::Wolf), 3);
    // Breeding never adds an animal by itself.
    assert_population!(eco, 2);
}

#[test]
fn test_remove_unknown_species() {
    let mut eco = forest();
    let rabbit = eco
        .add_species(animal(&eco, 0, SpeciesKind::Rabbit, 50, 100, 100))
        .expect("forest exists");
    assert!(matches!(eco.remove_species(rabbit), Removal::Removed(_)));
    assert!(matches!(eco.remove_species(rabbit), Removal::NotFound));
    assert_population!(eco, 0);
}
