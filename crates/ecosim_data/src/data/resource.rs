use super::entity::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Grass,
    Fruits,
    Algae,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Grass, ResourceKind::Fruits, ResourceKind::Algae];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Grass => "Grass",
            ResourceKind::Fruits => "Fruits",
            ResourceKind::Algae => "Algae",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plant-like food placed in an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub kind: ResourceKind,
    pub quantity: u32,
    pub position: Position,
    pub rate: f64,
}

impl Resource {
    #[must_use]
    pub fn new(kind: ResourceKind, quantity: u32, position: Position, rate: f64) -> Self {
        Self {
            id: ResourceId::new(),
            kind,
            quantity,
            position,
            rate,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
