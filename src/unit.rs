//! Combat units and the junction engine
//!
//! A unit owns its ledger and its ability mapping outright; the unit is the
//! isolation boundary. Derived attributes fold the ledger into the base
//! value on every read (the ledger stays small, so nothing is cached).

use std::collections::HashMap;

use crate::ability::JunctionAbility;
use crate::attributes::{Attribute, AttributeAdjustment};
use crate::constants::BASE_ATTRIBUTE;
use crate::error::{JunctionError, Result};
use crate::events::{CombatEvent, EventSink};
use crate::ledger::AdjustmentLedger;
use crate::rng::Dice;

/// A combat participant: base attributes, health, and whatever abilities
/// are currently junctioned onto it.
#[derive(Debug, Clone)]
pub struct CombatUnit {
    pub name: String,
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    max_health: i32,
    health: i32,
    ledger: AdjustmentLedger,
    abilities: HashMap<String, JunctionAbility>,
}

impl CombatUnit {
    /// Creates a unit at full health. `max_health` must be positive.
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        debug_assert!(max_health > 0);
        Self {
            name: name.into(),
            strength: BASE_ATTRIBUTE,
            dexterity: BASE_ATTRIBUTE,
            intelligence: BASE_ATTRIBUTE,
            max_health,
            health: max_health,
            ledger: AdjustmentLedger::new(),
            abilities: HashMap::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Adds `delta` to current health, clamped into `[0, max_health]`.
    /// Overshoot in either direction saturates rather than erroring.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, self.max_health);
    }

    /// Strength plus every junctioned strength adjustment.
    pub fn power(&self) -> i32 {
        self.strength + self.ledger.bonus(Attribute::Strength)
    }

    /// Dexterity plus every junctioned dexterity adjustment.
    pub fn agility(&self) -> i32 {
        self.dexterity + self.ledger.bonus(Attribute::Dexterity)
    }

    /// Intelligence plus every junctioned intelligence adjustment.
    pub fn mind(&self) -> i32 {
        self.intelligence + self.ledger.bonus(Attribute::Intelligence)
    }

    pub fn ledger(&self) -> &AdjustmentLedger {
        &self.ledger
    }

    /// Records an adjustment. Called by passive junction hooks; the
    /// adjustment's source must be the identifier of the junctioned ability
    /// that applies it.
    pub fn apply_adjustment(&mut self, adjustment: AttributeAdjustment) {
        self.ledger.apply(adjustment);
    }

    /// Removes every adjustment the given source applied.
    pub fn revoke_adjustments(&mut self, source: &str) -> usize {
        self.ledger.revoke(source)
    }

    pub fn has_junctioned(&self, ability_id: &str) -> bool {
        self.abilities.contains_key(ability_id)
    }

    pub fn junctioned(&self, ability_id: &str) -> Option<&JunctionAbility> {
        self.abilities.get(ability_id)
    }

    /// Attaches an ability under its identifier. Junctioning over an
    /// identifier already in use reverts the prior instance first (its
    /// unjunction hook runs when passive), so no ledger entry outlives its
    /// owner. A passive ability's junction hook runs once registered.
    pub fn junction(&mut self, ability: JunctionAbility) {
        if let Some(prior) = self.abilities.remove(ability.id()) {
            tracing::debug!("{} replaces junctioned \"{}\"", self.name, prior.id());
            if let JunctionAbility::Passive(passive) = &prior {
                passive.on_unjunction(self);
            }
        }
        let handle = ability.clone();
        self.abilities.insert(ability.id().to_string(), ability);
        tracing::debug!("{} junctions \"{}\"", self.name, handle.id());
        if let JunctionAbility::Passive(passive) = &handle {
            passive.on_junction(self);
        }
    }

    /// Detaches the ability registered under `ability_id`, running its
    /// unjunction hook when passive, and returns the detached handle.
    /// Unknown identifiers are a hard failure: there is nothing to remove.
    pub fn unjunction(&mut self, ability_id: &str) -> Result<JunctionAbility> {
        let ability =
            self.abilities
                .remove(ability_id)
                .ok_or_else(|| JunctionError::UnknownAbility {
                    unit: self.name.clone(),
                    ability: ability_id.to_string(),
                })?;
        if let JunctionAbility::Passive(passive) = &ability {
            passive.on_unjunction(self);
        }
        tracing::debug!("{} unjunctions \"{}\"", self.name, ability_id);
        Ok(ability)
    }

    /// Invokes an active ability against the supplied targets.
    ///
    /// An identifier this unit never junctioned is an expected runtime
    /// condition (a typo in a script, a stale hotbar): it is reported
    /// through the sink and the call returns cleanly. Invoking a passive
    /// ability is caller misuse and fails hard.
    pub fn perform_ability(
        &self,
        ability_id: &str,
        targets: &mut [&mut CombatUnit],
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let ability = match self.abilities.get(ability_id) {
            Some(ability) => ability,
            None => {
                tracing::info!("{} has no ability \"{}\"", self.name, ability_id);
                sink.emit(CombatEvent::NoSuchAbility {
                    unit: self.name.clone(),
                    ability: ability_id.to_string(),
                });
                return Ok(());
            }
        };
        match ability {
            JunctionAbility::Active(active) => active.action(self, targets, dice, sink),
            JunctionAbility::Passive(_) => Err(JunctionError::NotActive(ability_id.to_string())),
        }
    }
}

impl std::fmt::Display for CombatUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "HP: {}/{}", self.health, self.max_health)?;
        writeln!(f)?;
        writeln!(f, "STR: {}", self.strength)?;
        writeln!(f, "DEX: {}", self.dexterity)?;
        writeln!(f, "INT: {}", self.intelligence)?;
        writeln!(f)?;
        writeln!(f, "POW: {}", self.power())?;
        writeln!(f, "AGI: {}", self.agility())?;
        write!(f, "MND: {}", self.mind())
    }
}
