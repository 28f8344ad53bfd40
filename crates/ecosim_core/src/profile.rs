//! Per-kind behaviour constants.
//!
//! Every number that differs between kinds but not between instances lives
//! here, so species logic can dispatch on a table instead of a class tree.

use ecosim_data::SpeciesKind;

/// How an energy cost is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debit {
    /// Floored at zero, no immediate death check.
    Clamped,
    /// Plain subtraction followed by a death check.
    Checked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyCost {
    pub amount: i32,
    pub debit: Debit,
}

impl EnergyCost {
    const fn clamped(amount: i32) -> Self {
        Self {
            amount,
            debit: Debit::Clamped,
        }
    }

    const fn checked(amount: i32) -> Self {
        Self {
            amount,
            debit: Debit::Checked,
        }
    }
}

/// What a sleeping animal does when asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepPolicy {
    WakeOnMove,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorProfile {
    pub movement: EnergyCost,
    pub sleep_gain: i32,
    pub sleep_policy: SleepPolicy,
    /// Probability of noticing a predator; herbivores only.
    pub detection_chance: Option<f64>,
    pub flee: Option<EnergyCost>,
    /// Maximum hunting distance; carnivores only.
    pub hunt_range: Option<f64>,
    pub grouping_instinct: Option<bool>,
    pub default_speed: u32,
}

const RABBIT: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(5),
    sleep_gain: 20,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: Some(0.7),
    flee: Some(EnergyCost::clamped(10)),
    hunt_range: None,
    grouping_instinct: Some(true),
    default_speed: 10,
};

const CANARI: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::checked(5),
    sleep_gain: 15,
    sleep_policy: SleepPolicy::Blocked,
    detection_chance: Some(0.6),
    flee: Some(EnergyCost::checked(10)),
    hunt_range: None,
    grouping_instinct: Some(true),
    default_speed: 12,
};

const HERBIVOROUS_FISH: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(5),
    sleep_gain: 5,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: Some(0.6),
    flee: Some(EnergyCost::clamped(5)),
    hunt_range: None,
    grouping_instinct: Some(false),
    default_speed: 8,
};

const WOLF: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(8),
    sleep_gain: 20,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: None,
    flee: None,
    hunt_range: Some(300.0),
    grouping_instinct: None,
    default_speed: 15,
};

const SHARK: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(10),
    sleep_gain: 10,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: None,
    flee: None,
    hunt_range: Some(5.0),
    grouping_instinct: None,
    default_speed: 20,
};

const BEAR: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(10),
    sleep_gain: 30,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: None,
    flee: None,
    hunt_range: None,
    grouping_instinct: None,
    default_speed: 15,
};

const CROW: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::checked(5),
    sleep_gain: 20,
    sleep_policy: SleepPolicy::Blocked,
    detection_chance: None,
    flee: None,
    hunt_range: None,
    grouping_instinct: None,
    default_speed: 12,
};

const HUMAN: BehaviorProfile = BehaviorProfile {
    movement: EnergyCost::clamped(5),
    sleep_gain: 10,
    sleep_policy: SleepPolicy::WakeOnMove,
    detection_chance: None,
    flee: None,
    hunt_range: None,
    grouping_instinct: None,
    default_speed: 5,
};

#[must_use]
pub fn profile(kind: SpeciesKind) -> &'static BehaviorProfile {
    match kind {
        SpeciesKind::Rabbit => &RABBIT,
        SpeciesKind::Canari => &CANARI,
        SpeciesKind::HerbivorousFish => &HERBIVOROUS_FISH,
        SpeciesKind::Wolf => &WOLF,
        SpeciesKind::Shark => &SHARK,
        SpeciesKind::Bear => &BEAR,
        SpeciesKind::Crow => &CROW,
        SpeciesKind::Human => &HUMAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosim_data::Family;

    #[test]
    fn test_only_herbivores_detect_and_flee() {
        for kind in SpeciesKind::ALL {
            let p = profile(kind);
            let herbivore = kind.family() == Family::Herbivore;
            assert_eq!(p.detection_chance.is_some(), herbivore, "{kind}");
            assert_eq!(p.flee.is_some(), herbivore, "{kind}");
            assert_eq!(p.grouping_instinct.is_some(), herbivore, "{kind}");
        }
    }

    #[test]
    fn test_only_carnivores_hunt() {
        for kind in SpeciesKind::ALL {
            let hunts = profile(kind).hunt_range.is_some();
            assert_eq!(hunts, kind.family() == Family::Carnivore, "{kind}");
        }
    }

    #[test]
    fn test_birds_are_blocked_while_asleep() {
        assert_eq!(profile(SpeciesKind::Canari).sleep_policy, SleepPolicy::Blocked);
        assert_eq!(profile(SpeciesKind::Crow).sleep_policy, SleepPolicy::Blocked);
        assert_eq!(profile(SpeciesKind::Bear).sleep_policy, SleepPolicy::WakeOnMove);
    }
}
