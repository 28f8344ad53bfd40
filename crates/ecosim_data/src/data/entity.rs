use super::environment::EnvironmentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Integer world coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub Uuid);

impl SpeciesId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpeciesId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dietary family. Determines which pass of the interaction resolver an
/// animal takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    Herbivore,
    Carnivore,
    Omnivore,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeciesKind {
    Rabbit,
    Canari,
    HerbivorousFish,
    Wolf,
    Shark,
    Bear,
    Crow,
    Human,
}

impl SpeciesKind {
    pub const ALL: [SpeciesKind; 8] = [
        SpeciesKind::Rabbit,
        SpeciesKind::Canari,
        SpeciesKind::HerbivorousFish,
        SpeciesKind::Wolf,
        SpeciesKind::Shark,
        SpeciesKind::Bear,
        SpeciesKind::Crow,
        SpeciesKind::Human,
    ];

    #[must_use]
    pub fn family(self) -> Family {
        match self {
            SpeciesKind::Rabbit | SpeciesKind::Canari | SpeciesKind::HerbivorousFish => {
                Family::Herbivore
            }
            SpeciesKind::Wolf | SpeciesKind::Shark => Family::Carnivore,
            SpeciesKind::Bear | SpeciesKind::Crow => Family::Omnivore,
            SpeciesKind::Human => Family::Human,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeciesKind::Rabbit => "Rabbit",
            SpeciesKind::Canari => "Canari",
            SpeciesKind::HerbivorousFish => "HerbivorousFish",
            SpeciesKind::Wolf => "Wolf",
            SpeciesKind::Shark => "Shark",
            SpeciesKind::Bear => "Bear",
            SpeciesKind::Crow => "Crow",
            SpeciesKind::Human => "Human",
        }
    }

    /// Case-sensitive lookup by type label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    #[must_use]
    pub fn is_flying(self) -> bool {
        matches!(self, SpeciesKind::Canari | SpeciesKind::Crow)
    }

    #[must_use]
    pub fn is_marine(self) -> bool {
        matches!(self, SpeciesKind::HerbivorousFish | SpeciesKind::Shark)
    }
}

impl fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload carried next to the shared base record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpeciesTraits {
    Rabbit { speed_mps: f64 },
    Canari { feather_color: String },
    HerbivorousFish { swim_speed: f64 },
    Wolf { attack_strength: i32, pack_instinct: bool },
    Shark { attack_strength: i32, swim_speed: f64 },
    Bear { strength: f64, speed_mps: f64 },
    Crow { feather_color: String },
    Human { defense_power: i32 },
}

impl SpeciesTraits {
    #[must_use]
    pub fn kind(&self) -> SpeciesKind {
        match self {
            SpeciesTraits::Rabbit { .. } => SpeciesKind::Rabbit,
            SpeciesTraits::Canari { .. } => SpeciesKind::Canari,
            SpeciesTraits::HerbivorousFish { .. } => SpeciesKind::HerbivorousFish,
            SpeciesTraits::Wolf { .. } => SpeciesKind::Wolf,
            SpeciesTraits::Shark { .. } => SpeciesKind::Shark,
            SpeciesTraits::Bear { .. } => SpeciesKind::Bear,
            SpeciesTraits::Crow { .. } => SpeciesKind::Crow,
            SpeciesTraits::Human { .. } => SpeciesKind::Human,
        }
    }

    /// Traits used when an instance is built from a bare type label.
    #[must_use]
    pub fn default_for(kind: SpeciesKind) -> Self {
        match kind {
            SpeciesKind::Rabbit => SpeciesTraits::Rabbit { speed_mps: 2.0 },
            SpeciesKind::Canari => SpeciesTraits::Canari {
                feather_color: "yellow".to_string(),
            },
            SpeciesKind::HerbivorousFish => SpeciesTraits::HerbivorousFish { swim_speed: 3.0 },
            SpeciesKind::Wolf => SpeciesTraits::Wolf {
                attack_strength: 30,
                pack_instinct: true,
            },
            SpeciesKind::Shark => SpeciesTraits::Shark {
                attack_strength: 40,
                swim_speed: 8.0,
            },
            SpeciesKind::Bear => SpeciesTraits::Bear {
                strength: 20.0,
                speed_mps: 5.0,
            },
            SpeciesKind::Crow => SpeciesTraits::Crow {
                feather_color: "black".to_string(),
            },
            SpeciesKind::Human => SpeciesTraits::Human { defense_power: 5 },
        }
    }
}

/// A living animal: the shared base record plus its kind payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub energy: i32,
    pub position: Position,
    pub environment: EnvironmentId,
    /// General movement speed.
    pub speed: u32,
    pub sleeping: bool,
    pub traits: SpeciesTraits,
}

impl Species {
    /// Builds an awake animal. Negative starting energy is clamped to zero.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        energy: i32,
        position: Position,
        environment: EnvironmentId,
        speed: u32,
        traits: SpeciesTraits,
    ) -> Self {
        Self {
            id: SpeciesId::new(),
            name: name.into(),
            energy: energy.max(0),
            position,
            environment,
            speed,
            sleeping: false,
            traits,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SpeciesKind {
        self.traits.kind()
    }

    #[must_use]
    pub fn family(&self) -> Family {
        self.kind().family()
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}
