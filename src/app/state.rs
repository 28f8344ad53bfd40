use anyhow::Result;
use ecosim_core::config::AppConfig;
use ecosim_core::interaction::InteractionEvent;
use ecosim_core::{CycleReport, Ecosystem};
use ecosim_data::{ResourceKind, SpeciesId, SpeciesKind};
use serde::Serialize;

use super::behaviour::{self, BehaviourReport};
use super::{breeding, season_effects};
use super::setup::{self, Habitats};

/// Everything one tick of the runner produced.
#[derive(Debug, Clone, Serialize)]
pub struct TickSummary {
    pub tick: u64,
    pub cycle: CycleReport,
    pub events: Vec<InteractionEvent>,
    pub behaviour: BehaviourReport,
}

pub struct App {
    pub ecosystem: Ecosystem,
    pub habitats: Habitats,
    pub running: bool,
    pub tick: u64,
}

impl App {
    pub fn new(config: AppConfig) -> ecosim_core::Result<Self> {
        let mut ecosystem = Ecosystem::new(config)?;
        let habitats = setup::populate(&mut ecosystem)?;
        tracing::info!(
            population = ecosystem.population(),
            resources = ecosystem.resource_count(),
            "World populated"
        );
        Ok(Self {
            ecosystem,
            habitats,
            running: true,
            tick: 0,
        })
    }

    /// One simulation cycle, the proximity pass, then the behaviour pass.
    pub fn step(&mut self) -> TickSummary {
        self.tick += 1;
        let cycle = self.ecosystem.run_cycle();
        let events = self.ecosystem.resolve_interactions();
        let behaviour = behaviour::run(&mut self.ecosystem);
        TickSummary {
            tick: self.tick,
            cycle,
            events,
            behaviour,
        }
    }

    /// The status line shown once per tick.
    #[must_use]
    pub fn stats_line(&self) -> String {
        let report = self.ecosystem.report();
        format!(
            "Rabbits: {}  Wolves: {}  Grass: {}",
            report.living(SpeciesKind::Rabbit),
            report.living(SpeciesKind::Wolf),
            report.resources_of(ResourceKind::Grass)
        )
    }

    /// Sets the season everywhere, then applies its forest multipliers.
    /// Returns any animals born from the season's breeding attempts.
    pub fn select_season(&mut self, label: &str) -> Result<Vec<SpeciesId>> {
        for effect in self.ecosystem.update_season(label) {
            if let Some(narrative) = effect.narrative {
                tracing::info!(season = %effect.season, "{narrative}");
            }
        }
        season_effects::apply(&mut self.ecosystem, self.habitats.forest, label)
    }

    pub fn breed(&mut self, label: &str) -> Result<Option<SpeciesId>> {
        breeding::breed(&mut self.ecosystem, label)
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.ecosystem.population() == 0
    }
}
