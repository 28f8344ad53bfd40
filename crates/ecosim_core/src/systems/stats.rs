use crate::environment::Environment;
use crate::population::PopulationCounters;
use ecosim_data::{Position, ResourceKind, SpeciesKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSummary {
    pub name: String,
    pub kind: SpeciesKind,
    pub energy: i32,
    pub position: Position,
    pub sleeping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub kind: ResourceKind,
    pub quantity: u32,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSummary {
    pub name: String,
    pub habitat: &'static str,
    pub scalar: f64,
    pub season: String,
    pub species: Vec<SpeciesSummary>,
    pub resources: Vec<ResourceSummary>,
}

/// Aggregate state for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemReport {
    pub cycle: u64,
    pub environments: Vec<EnvironmentSummary>,
    /// Animals currently alive, per kind label.
    pub living: BTreeMap<String, usize>,
    /// Creation counters, per kind label.
    pub created: BTreeMap<String, u64>,
    pub resources: BTreeMap<String, usize>,
}

impl EcosystemReport {
    #[must_use]
    pub fn living(&self, kind: SpeciesKind) -> usize {
        self.living.get(kind.label()).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn resources_of(&self, kind: ResourceKind) -> usize {
        self.resources.get(kind.label()).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.living.values().sum()
    }
}

pub fn build_report(
    cycle: u64,
    environments: &[Environment],
    counters: &PopulationCounters,
) -> EcosystemReport {
    let mut living = BTreeMap::new();
    let mut resources = BTreeMap::new();
    let summaries = environments
        .iter()
        .map(|env| {
            for s in env.species() {
                *living.entry(s.label().to_string()).or_insert(0) += 1;
            }
            for r in env.resources() {
                *resources.entry(r.label().to_string()).or_insert(0) += 1;
            }
            EnvironmentSummary {
                name: env.name().to_string(),
                habitat: env.habitat().label(),
                scalar: env.scalar(),
                season: env.season().label().to_string(),
                species: env
                    .species()
                    .iter()
                    .map(|s| SpeciesSummary {
                        name: s.name.clone(),
                        kind: s.kind(),
                        energy: s.energy,
                        position: s.position,
                        sleeping: s.sleeping,
                    })
                    .collect(),
                resources: env
                    .resources()
                    .iter()
                    .map(|r| ResourceSummary {
                        kind: r.kind,
                        quantity: r.quantity,
                        position: r.position,
                    })
                    .collect(),
            }
        })
        .collect();

    EcosystemReport {
        cycle,
        environments: summaries,
        living,
        created: counters
            .iter()
            .map(|(k, v)| (k.label().to_string(), v))
            .collect(),
        resources,
    }
}

impl fmt::Display for EcosystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Ecosystem, cycle {} ===", self.cycle)?;
        for env in &self.environments {
            writeln!(
                f,
                "{} ({}, {:.2}) - {}",
                env.name, env.habitat, env.scalar, env.season
            )?;
            for s in &env.species {
                let state = if s.sleeping { " (asleep)" } else { "" };
                writeln!(
                    f,
                    "  {} [{}] energy {} at {}{}",
                    s.name, s.kind, s.energy, s.position, state
                )?;
            }
            for r in &env.resources {
                writeln!(f, "  {} x{} at {}", r.kind, r.quantity, r.position)?;
            }
        }
        let living = self
            .living
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        let resources = self
            .resources
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Living: {living}")?;
        write!(f, "Resources: {resources}")
    }
}
