//! Simulation counters and structured logging setup.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Metrics collector for simulation statistics.
pub struct Metrics {
    cycle_count: AtomicU64,
    population: AtomicU64,
    resource_count: AtomicU64,
    counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("cycle_count", &self.cycle_count())
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cycle_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            resource_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed cycle with its duration.
    pub fn record_cycle(&self, duration: Duration, population: usize, resources: usize) {
        self.cycle_count.fetch_add(1, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);
        self.resource_count.store(resources as u64, Ordering::Relaxed);

        let cycle = self.cycle_count.load(Ordering::Relaxed);
        if cycle % 10 == 0 {
            tracing::info!(
                cycle = cycle,
                population = population,
                resources = resources,
                births = self.counter("births"),
                deaths = self.counter("deaths"),
                duration_us = duration.as_micros() as u64,
                "Simulation cycle"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    /// Current value of a named counter, zero if it was never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn resource_count(&self) -> u64 {
        self.resource_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
