pub mod behaviour;
pub mod breeding;
pub mod season_effects;
pub mod setup;
pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::{App, TickSummary};

use anyhow::Result;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One status line per tick
    #[default]
    Text,
    /// One JSON object per tick
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many ticks; run until interrupted when `None`.
    pub max_ticks: Option<u64>,
    pub output: OutputFormat,
    /// Skip the interval wait between ticks.
    pub fast: bool,
}

impl App {
    pub async fn run(&mut self, options: &RunOptions) -> Result<()> {
        let shutdown = ShutdownManager::new();
        shutdown.listen_for_ctrl_c();

        let period = Duration::from_millis(self.ecosystem.config().world.tick_interval_ms);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running && !shutdown.is_shutdown_requested() {
            if !options.fast {
                interval.tick().await;
            }

            let summary = self.step();
            match options.output {
                OutputFormat::Text => println!("{}", self.stats_line()),
                OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
            }

            if self.is_extinct() {
                tracing::warn!(tick = self.tick, "Every animal has died");
                self.running = false;
            }
            if options.max_ticks.is_some_and(|max| self.tick >= max) {
                self.running = false;
            }
            if options.fast {
                tokio::task::yield_now().await;
            }
        }

        tracing::info!(tick = self.tick, "Simulation stopped");
        match options.output {
            OutputFormat::Text => println!("{}", self.ecosystem.report()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&self.ecosystem.report())?),
        }
        Ok(())
    }
}
