//! Behaviour of every animal kind.
//!
//! `SpeciesLogic` is implemented once for the shared `Species` record. Kind
//! differences come from the [`profile`](crate::profile) table and from the
//! diet derived from each instance's trait payload.

use crate::placement::{distance, Bounds};
use crate::population::{can_reproduce, PopulationCounters};
use crate::profile::{profile, BehaviorProfile, Debit, EnergyCost, SleepPolicy};
use crate::resource::ResourceLogic;
use ecosim_data::{Family, Position, Resource, ResourceKind, Species, SpeciesKind, SpeciesTraits};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Displacement applied by one move, before clamping to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Both components drawn uniformly from `min..=max`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Self {
        Self {
            dx: rng.gen_range(min..=max),
            dy: rng.gen_range(min..=max),
        }
    }

    /// A step of `step` units on each axis pointing from `threat` to `from`.
    #[must_use]
    pub fn away_from(from: Position, threat: Position, step: i32) -> Self {
        let sx = match from.x.cmp(&threat.x) {
            std::cmp::Ordering::Less => -1,
            _ => 1,
        };
        let sy = match from.y.cmp(&threat.y) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        Self::new(sx * step, sy * step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// `died` is only ever set for kinds whose movement is death-checked.
    Moved { to: Position, died: bool },
    Asleep,
}

/// What an animal is offered to eat.
#[derive(Debug)]
pub enum Food<'a> {
    Resource(&'a mut Resource),
    Prey(&'a mut Species),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EatOutcome {
    Consumed { gained: i32 },
    /// Omnivore bite on prey too strong to finish.
    Partial { gained: i32 },
    /// Not part of the diet; nothing changed.
    Rejected,
}

impl EatOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, EatOutcome::Consumed { .. })
    }
}

/// Feeding rules of one instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diet {
    Grazer {
        accepts: ResourceKind,
        portion: u32,
    },
    Predator,
    Omnivore {
        threshold: i32,
        bite: i32,
        portion: u32,
        /// `None` accepts every resource kind.
        accepts: Option<ResourceKind>,
    },
    Abstains,
}

const CROW_BITE: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackOutcome {
    Killed { gained: i32 },
    Wounded { gained: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HuntOutcome {
    Struck(AttackOutcome),
    /// Different environment or beyond the hunting range.
    OutOfReach,
    NotAPredator,
}

impl HuntOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, HuntOutcome::Struck(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleeOutcome {
    Fled { died: bool },
    CannotFlee,
}

/// Result of a human meeting another animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    Fed,
    KeptDistance,
    Observed,
    NotHuman,
}

/// Reaction of an animal that a predator tries to take by surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredatorEncounter {
    /// Was asleep but stronger than the predator: woke and moved away.
    Escaped { to: Position },
    /// Was asleep and weaker: the owner must remove it.
    Caught,
    /// Awake and ready to defend itself.
    Alert,
}

pub trait SpeciesLogic {
    fn profile(&self) -> &'static BehaviorProfile;
    fn diet(&self) -> Diet;
    fn accepts(&self, resource: &Resource) -> bool;
    fn attack_strength(&self) -> Option<i32>;

    fn is_alive(&self) -> bool;
    fn is_dead(&self) -> bool;
    fn set_energy(&mut self, energy: i32);
    /// Unclamped subtraction. Returns `true` if the animal is now dead and
    /// must go through its environment's death check.
    fn reduce_energy(&mut self, amount: i32) -> bool;
    /// Subtraction floored at zero, without a death check.
    fn consume_energy(&mut self, amount: i32);

    fn travel(&mut self, direction: Direction, bounds: &Bounds) -> MoveOutcome;
    fn eat(&mut self, food: Food<'_>) -> EatOutcome;
    fn hunt(&mut self, prey: &mut Species) -> HuntOutcome;
    fn attack(&mut self, prey: &mut Species) -> Option<AttackOutcome>;
    fn reproduce(&self, counters: &mut PopulationCounters) -> bool;

    fn sleep(&mut self) -> bool;
    fn wake_up(&mut self) -> bool;
    fn is_sleeping(&self) -> bool;

    fn detect_predator<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool;
    fn flee(&mut self) -> FleeOutcome;
    fn grouping_instinct(&self) -> Option<bool>;
    fn handle_predator_attack(&mut self, predator: &Species, bounds: &Bounds)
        -> PredatorEncounter;

    fn defend(&self, attack_power: i32) -> Option<bool>;
    fn interact_with(&self, other: &mut Species) -> Encounter;
}

/// Energy bookkeeping shared by the behaviour methods.
trait EnergyExt {
    fn gain(&mut self, amount: i32);
    /// Applies a movement or flee cost. Returns `true` if it killed.
    fn charge(&mut self, cost: EnergyCost) -> bool;
    /// Takes all of `prey`'s remaining energy.
    fn devour(&mut self, prey: &mut Species) -> i32;
}

impl EnergyExt for Species {
    fn gain(&mut self, amount: i32) {
        self.energy = self.energy.saturating_add(amount);
    }

    fn charge(&mut self, cost: EnergyCost) -> bool {
        match cost.debit {
            Debit::Clamped => {
                self.consume_energy(cost.amount);
                false
            }
            Debit::Checked => self.reduce_energy(cost.amount),
        }
    }

    fn devour(&mut self, prey: &mut Species) -> i32 {
        let gained = prey.energy.max(0);
        prey.energy = 0;
        self.gain(gained);
        gained
    }
}

impl SpeciesLogic for Species {
    fn profile(&self) -> &'static BehaviorProfile {
        profile(self.kind())
    }

    fn diet(&self) -> Diet {
        match &self.traits {
            SpeciesTraits::Rabbit { .. } => Diet::Grazer {
                accepts: ResourceKind::Grass,
                portion: 20,
            },
            SpeciesTraits::Canari { .. } => Diet::Grazer {
                accepts: ResourceKind::Fruits,
                portion: 20,
            },
            SpeciesTraits::HerbivorousFish { .. } => Diet::Grazer {
                accepts: ResourceKind::Algae,
                portion: 20,
            },
            SpeciesTraits::Wolf { .. } | SpeciesTraits::Shark { .. } => Diet::Predator,
            SpeciesTraits::Bear { strength, .. } => {
                let strength = strength.round() as i32;
                Diet::Omnivore {
                    threshold: strength,
                    bite: strength,
                    portion: 20,
                    accepts: None,
                }
            }
            SpeciesTraits::Crow { .. } => Diet::Omnivore {
                threshold: CROW_BITE,
                bite: CROW_BITE,
                portion: 15,
                accepts: Some(ResourceKind::Fruits),
            },
            SpeciesTraits::Human { .. } => Diet::Abstains,
        }
    }

    fn accepts(&self, resource: &Resource) -> bool {
        match self.diet() {
            Diet::Grazer { accepts, .. } => accepts == resource.kind,
            Diet::Omnivore { accepts, .. } => accepts.map_or(true, |k| k == resource.kind),
            Diet::Predator | Diet::Abstains => false,
        }
    }

    fn attack_strength(&self) -> Option<i32> {
        match self.traits {
            SpeciesTraits::Wolf {
                attack_strength, ..
            }
            | SpeciesTraits::Shark {
                attack_strength, ..
            } => Some(attack_strength),
            _ => None,
        }
    }

    fn is_alive(&self) -> bool {
        self.energy > 0
    }

    fn is_dead(&self) -> bool {
        self.energy <= 0
    }

    fn set_energy(&mut self, energy: i32) {
        self.energy = energy.max(0);
    }

    fn reduce_energy(&mut self, amount: i32) -> bool {
        self.energy = self.energy.saturating_sub(amount);
        self.is_dead()
    }

    fn consume_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_sub(amount).max(0);
    }

    fn travel(&mut self, direction: Direction, bounds: &Bounds) -> MoveOutcome {
        let profile = self.profile();
        if self.sleeping {
            match profile.sleep_policy {
                SleepPolicy::Blocked => {
                    tracing::debug!(name = %self.name, kind = %self.kind(), "Asleep, cannot move");
                    return MoveOutcome::Asleep;
                }
                SleepPolicy::WakeOnMove => {
                    self.wake_up();
                }
            }
        }

        let died = self.charge(profile.movement);
        if !died {
            let target = Position::new(
                self.position.x.saturating_add(direction.dx),
                self.position.y.saturating_add(direction.dy),
            );
            self.position = bounds.clamp(target);
        }
        tracing::debug!(
            name = %self.name,
            kind = %self.kind(),
            x = self.position.x,
            y = self.position.y,
            energy = self.energy,
            "Moved"
        );
        MoveOutcome::Moved {
            to: self.position,
            died,
        }
    }

    fn eat(&mut self, food: Food<'_>) -> EatOutcome {
        let outcome = match (self.diet(), food) {
            (Diet::Grazer { accepts, portion }, Food::Resource(resource))
                if resource.kind == accepts =>
            {
                resource.consume(portion);
                let gained = portion as i32;
                self.gain(gained);
                EatOutcome::Consumed { gained }
            }
            (Diet::Predator, Food::Prey(prey)) => EatOutcome::Consumed {
                gained: self.devour(prey),
            },
            (Diet::Omnivore { threshold, bite, .. }, Food::Prey(prey)) => {
                if prey.energy <= threshold {
                    EatOutcome::Consumed {
                        gained: self.devour(prey),
                    }
                } else {
                    prey.energy -= bite;
                    self.gain(bite);
                    EatOutcome::Partial { gained: bite }
                }
            }
            (Diet::Omnivore {
                portion, accepts, ..
            }, Food::Resource(resource))
                if accepts.map_or(true, |k| k == resource.kind) =>
            {
                resource.consume(portion);
                let gained = portion as i32;
                self.gain(gained);
                EatOutcome::Consumed { gained }
            }
            _ => EatOutcome::Rejected,
        };
        tracing::debug!(name = %self.name, kind = %self.kind(), ?outcome, "Eat");
        outcome
    }

    fn hunt(&mut self, prey: &mut Species) -> HuntOutcome {
        let Some(range) = self.profile().hunt_range else {
            return HuntOutcome::NotAPredator;
        };
        if self.environment != prey.environment || distance(self.position, prey.position) > range
        {
            return HuntOutcome::OutOfReach;
        }
        match self.attack(prey) {
            Some(outcome) => HuntOutcome::Struck(outcome),
            None => HuntOutcome::NotAPredator,
        }
    }

    fn attack(&mut self, prey: &mut Species) -> Option<AttackOutcome> {
        let strength = self.attack_strength()?;
        let outcome = if prey.energy <= strength {
            AttackOutcome::Killed {
                gained: self.devour(prey),
            }
        } else {
            prey.energy -= strength;
            self.gain(strength);
            AttackOutcome::Wounded { gained: strength }
        };
        tracing::debug!(
            predator = %self.name,
            prey = %prey.name,
            ?outcome,
            "Attack"
        );
        Some(outcome)
    }

    fn reproduce(&self, counters: &mut PopulationCounters) -> bool {
        let kind = self.kind();
        if !can_reproduce(counters.get(kind)) {
            return false;
        }
        let count = counters.increment(kind);
        tracing::debug!(name = %self.name, %kind, count, "Reproduced");
        true
    }

    fn sleep(&mut self) -> bool {
        if self.sleeping {
            return false;
        }
        self.sleeping = true;
        self.gain(self.profile().sleep_gain);
        tracing::debug!(name = %self.name, energy = self.energy, "Fell asleep");
        true
    }

    fn wake_up(&mut self) -> bool {
        std::mem::replace(&mut self.sleeping, false)
    }

    fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    fn detect_predator<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(chance) = self.profile().detection_chance else {
            return false;
        };
        if !rng.gen_bool(chance) {
            return false;
        }
        tracing::debug!(name = %self.name, "Predator detected");
        self.flee();
        true
    }

    fn flee(&mut self) -> FleeOutcome {
        match self.profile().flee {
            Some(cost) => FleeOutcome::Fled {
                died: self.charge(cost),
            },
            None => FleeOutcome::CannotFlee,
        }
    }

    fn grouping_instinct(&self) -> Option<bool> {
        self.profile().grouping_instinct
    }

    fn handle_predator_attack(
        &mut self,
        predator: &Species,
        bounds: &Bounds,
    ) -> PredatorEncounter {
        if !self.sleeping {
            return PredatorEncounter::Alert;
        }
        if self.energy > predator.energy {
            self.wake_up();
            let away = Direction::away_from(self.position, predator.position, 20);
            self.travel(away, bounds);
            PredatorEncounter::Escaped { to: self.position }
        } else {
            PredatorEncounter::Caught
        }
    }

    fn defend(&self, attack_power: i32) -> Option<bool> {
        match self.traits {
            SpeciesTraits::Human { defense_power } => Some(defense_power >= attack_power),
            _ => None,
        }
    }

    fn interact_with(&self, other: &mut Species) -> Encounter {
        if self.kind() != SpeciesKind::Human {
            return Encounter::NotHuman;
        }
        match other.family() {
            Family::Herbivore => {
                other.gain(10);
                Encounter::Fed
            }
            Family::Carnivore => Encounter::KeptDistance,
            Family::Omnivore | Family::Human => Encounter::Observed,
        }
    }
}
