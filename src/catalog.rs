//! Bundled ability catalog
//!
//! Reference implementations against the public contracts: two active
//! abilities resolving through the dice seam, one passive strength boost.
//! Custom abilities live outside the crate and implement the same traits.

use crate::ability::{Ability, ActiveAbility, PassiveAbility};
use crate::attributes::{Attribute, AttributeAdjustment};
use crate::constants::{
    ATTACK_ROLL_MAX, ATTACK_ROLL_MIN, HEAL_ROLL_MAX, HEAL_ROLL_MIN, STRENGTH_UP_BONUS,
};
use crate::error::{JunctionError, Result};
use crate::events::{CombatEvent, EventSink};
use crate::rng::Dice;
use crate::unit::CombatUnit;

fn first_target<'a, 'b>(
    ability: &dyn Ability,
    targets: &'a mut [&'b mut CombatUnit],
) -> Result<&'a mut &'b mut CombatUnit> {
    targets
        .first_mut()
        .ok_or_else(|| JunctionError::MissingTarget {
            ability: ability.id().to_string(),
        })
}

/// Restores a rolled amount of health to the first target.
pub struct Heal;

impl Ability for Heal {
    fn id(&self) -> &str {
        "heal"
    }

    fn name(&self) -> &str {
        "Heal"
    }
}

impl ActiveAbility for Heal {
    fn action(
        &self,
        user: &CombatUnit,
        targets: &mut [&mut CombatUnit],
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let target = first_target(self, targets)?;
        let healed = dice.roll(HEAL_ROLL_MIN, HEAL_ROLL_MAX);
        target.adjust_health(healed);
        sink.emit(CombatEvent::Cast {
            user: user.name.clone(),
            ability: self.name().to_string(),
            target: target.name.clone(),
        });
        sink.emit(CombatEvent::Healed {
            target: target.name.clone(),
            amount: healed,
        });
        Ok(())
    }
}

/// Damages the first target by half of roll-plus-power.
pub struct Attack;

impl Ability for Attack {
    fn id(&self) -> &str {
        "attack"
    }

    fn name(&self) -> &str {
        "Attack"
    }
}

impl ActiveAbility for Attack {
    fn action(
        &self,
        user: &CombatUnit,
        targets: &mut [&mut CombatUnit],
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<()> {
        let target = first_target(self, targets)?;
        let damage = (dice.roll(ATTACK_ROLL_MIN, ATTACK_ROLL_MAX) + user.power()) / 2;
        target.adjust_health(-damage);
        sink.emit(CombatEvent::Attacked {
            attacker: user.name.clone(),
            target: target.name.clone(),
        });
        sink.emit(CombatEvent::Damaged {
            target: target.name.clone(),
            amount: damage,
        });
        Ok(())
    }
}

/// Boosts strength while junctioned; the boost is revoked on unjunction.
pub struct StrengthUp;

impl Ability for StrengthUp {
    fn id(&self) -> &str {
        "str-up"
    }

    fn name(&self) -> &str {
        "Strength Up"
    }
}

impl PassiveAbility for StrengthUp {
    fn on_junction(&self, unit: &mut CombatUnit) {
        unit.apply_adjustment(AttributeAdjustment::new(
            self.id(),
            Attribute::Strength,
            STRENGTH_UP_BONUS,
        ));
    }

    fn on_unjunction(&self, unit: &mut CombatUnit) {
        unit.revoke_adjustments(self.id());
    }
}
