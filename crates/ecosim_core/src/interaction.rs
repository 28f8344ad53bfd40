use crate::species::AttackOutcome;
use ecosim_data::{ResourceId, ResourceKind, SpeciesId, SpeciesKind};
use serde::Serialize;

/// Something that happened during one interaction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InteractionEvent {
    Ate {
        eater: SpeciesId,
        resource: ResourceId,
        kind: ResourceKind,
        gained: i32,
    },
    ResourceDepleted {
        resource: ResourceId,
        kind: ResourceKind,
    },
    Hunted {
        predator: SpeciesId,
        prey: SpeciesId,
        outcome: AttackOutcome,
    },
    Missed {
        predator: SpeciesId,
        prey: SpeciesId,
    },
    Died {
        species: SpeciesId,
        kind: SpeciesKind,
    },
}

impl InteractionEvent {
    #[must_use]
    pub fn is_death(&self) -> bool {
        matches!(self, InteractionEvent::Died { .. })
    }
}
