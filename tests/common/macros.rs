/// Asserts that the animal with the given ID is registered with exactly this energy.
#[macro_export]
macro_rules! assert_energy {
    ($eco:expr, $id:expr, $energy:expr) => {
        let animal = $eco.species($id).expect("Species not found in ecosystem");
        assert_eq!(
            animal.energy, $energy,
            "Species {} energy {} is not {}",
            animal.name, animal.energy, $energy
        );
    };
}

/// Asserts that no environment holds the animal with the given ID anymore.
#[macro_export]
macro_rules! assert_species_removed {
    ($eco:expr, $id:expr) => {
        assert!(
            $eco.species($id).is_none(),
            "Species {} should be gone but was found",
            $id
        );
    };
}

/// Asserts that the number of registered animals matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($eco:expr, $count:expr) => {
        assert_eq!($eco.population(), $count, "Population count mismatch");
    };
}
