use crate::config::SeasonProgression;
use crate::environment::{Environment, SeasonalEffect};
use ecosim_data::EnvironmentId;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Recomputes every habitat scalar. Environments are disjoint, so with the
/// `parallel` feature they are processed concurrently.
pub fn apply_rules(environments: &mut [Environment]) -> Vec<(EnvironmentId, f64)> {
    #[cfg(feature = "parallel")]
    let iter = environments.par_iter_mut();
    #[cfg(not(feature = "parallel"))]
    let iter = environments.iter_mut();

    iter.map(|env| (env.id(), env.apply_rules())).collect()
}

/// Sets the same season everywhere.
pub fn set_season(environments: &mut [Environment], label: &str) -> Vec<SeasonalEffect> {
    environments
        .iter_mut()
        .map(|env| env.update_season(label))
        .collect()
}

/// End-of-cycle season step.
pub fn advance_seasons(
    environments: &mut [Environment],
    progression: SeasonProgression,
) -> Vec<SeasonalEffect> {
    environments
        .iter_mut()
        .map(|env| {
            let next = match progression {
                SeasonProgression::ResetToSpring => "Spring".to_string(),
                SeasonProgression::Advance => env.season().next().label().to_string(),
            };
            env.update_season(&next)
        })
        .collect()
}
