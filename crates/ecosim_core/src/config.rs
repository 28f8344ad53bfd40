//! Configuration management for simulation parameters.
//!
//! Strongly-typed sections that map onto `config.toml`. Every field has a
//! default, so a partial file only overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1024
//! height = 768
//! seed = 42
//!
//! [placement]
//! min_distance = 50.0
//!
//! [cycle]
//! season_progression = "Advance"
//! ```

use crate::placement::Bounds;
use serde::{Deserialize, Serialize};

/// World dimensions and pacing.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub seed: Option<u64>,
    pub tick_interval_ms: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            seed: None,
            tick_interval_ms: 1000,
        }
    }
}

impl WorldConfig {
    /// Inclusive pixel bounds, `0..=width - 1` by `0..=height - 1`.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, self.width - 1, 0, self.height - 1)
    }
}

/// Minimum-separation placement of new entities.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PlacementConfig {
    pub min_distance: f64,
    pub max_attempts: u32,
    /// Fall back to the most isolated candidate instead of failing.
    pub relax_on_exhaustion: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_attempts: 1000,
            relax_on_exhaustion: true,
        }
    }
}

/// Proximity radii used by the eat and hunt passes. Both are strict.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InteractionConfig {
    pub eat_radius: f64,
    pub hunt_radius: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            eat_radius: 100.0,
            hunt_radius: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeasonProgression {
    /// Every cycle ends with all environments set back to Spring.
    #[default]
    ResetToSpring,
    /// Every cycle steps each environment to the following season.
    Advance,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CycleConfig {
    pub season_progression: SeasonProgression,
    pub move_spread_min: i32,
    pub move_spread_max: i32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            season_progression: SeasonProgression::ResetToSpring,
            move_spread_min: -20,
            move_spread_max: 40,
        }
    }
}

/// Initial head counts used by the runner when it populates the world.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PopulationConfig {
    pub rabbits: usize,
    pub wolves: usize,
    pub humans: usize,
    pub bears: usize,
    pub canaris: usize,
    pub crows: usize,
    pub fish: usize,
    pub sharks: usize,
    pub grass: usize,
    pub fruits: usize,
    pub algae: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            rabbits: 16,
            wolves: 8,
            humans: 8,
            bears: 8,
            canaris: 4,
            crows: 2,
            fish: 6,
            sharks: 2,
            grass: 28,
            fruits: 10,
            algae: 12,
        }
    }
}

impl PopulationConfig {
    /// Sum of every head count, or `None` if it overflows.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        [
            self.rabbits,
            self.wolves,
            self.humans,
            self.bears,
            self.canaris,
            self.crows,
            self.fish,
            self.sharks,
            self.grass,
            self.fruits,
            self.algae,
        ]
        .into_iter()
        .try_fold(0usize, usize::checked_add)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub placement: PlacementConfig,
    pub interaction: InteractionConfig,
    pub cycle: CycleConfig,
    pub population: PopulationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if every parameter is usable, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.width > 0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0, "World height must be positive");
        anyhow::ensure!(
            self.world.tick_interval_ms > 0,
            "Tick interval must be positive"
        );

        anyhow::ensure!(
            self.placement.min_distance >= 0.0 && self.placement.min_distance.is_finite(),
            "Minimum placement distance must be a non-negative number"
        );
        anyhow::ensure!(
            self.placement.max_attempts > 0,
            "Placement needs at least one attempt"
        );

        anyhow::ensure!(
            self.interaction.eat_radius > 0.0,
            "Eat radius must be positive"
        );
        anyhow::ensure!(
            self.interaction.hunt_radius > 0.0,
            "Hunt radius must be positive"
        );

        anyhow::ensure!(
            self.cycle.move_spread_min <= self.cycle.move_spread_max,
            "Movement spread minimum must not exceed its maximum"
        );

        anyhow::ensure!(
            self.population.total().is_some_and(|total| total <= 10_000),
            "Initial population too large (max 10000)"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Hash of the rule-bearing sections, for comparing runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.placement).as_bytes());
        hasher.update(format!("{:?}", self.interaction).as_bytes());
        hasher.update(format!("{:?}", self.cycle).as_bytes());
        hex::encode(hasher.finalize())
    }
}
