//! The polymorphic ability contract
//!
//! Abilities come in two kinds: active abilities are invoked on demand and
//! resolve against targets; passive abilities react to junction lifecycle
//! events by placing and revoking ledger adjustments. Both kinds expose a
//! stable identifier (the mapping key and ledger source tag) and a display
//! name. Dispatch is by enum discriminant, never by name matching.

use std::sync::Arc;

use crate::error::Result;
use crate::events::EventSink;
use crate::rng::Dice;
use crate::unit::CombatUnit;

/// Metadata every ability carries.
pub trait Ability {
    /// Stable identifier: the junction mapping key and the `source` tag of
    /// any ledger adjustment this ability applies.
    fn id(&self) -> &str;

    /// Human-readable name used in narration.
    fn name(&self) -> &str;
}

/// An ability invoked on demand against caller-supplied targets.
pub trait ActiveAbility: Ability + Send + Sync {
    /// Resolves the ability: reads the user's derived attributes, mutates
    /// target health, and emits events describing what happened. Targets
    /// must not include the user.
    fn action(
        &self,
        user: &CombatUnit,
        targets: &mut [&mut CombatUnit],
        dice: &mut dyn Dice,
        sink: &mut dyn EventSink,
    ) -> Result<()>;
}

/// An ability whose effect lives exactly as long as it stays junctioned.
///
/// The two hooks must be exact inverses with respect to ledger contents:
/// unjunctioning and re-junctioning leaves the unit's ledger unchanged.
pub trait PassiveAbility: Ability + Send + Sync {
    fn on_junction(&self, unit: &mut CombatUnit);
    fn on_unjunction(&self, unit: &mut CombatUnit);
}

/// A junctionable ability handle. Instances are stateless (all state they
/// produce lives in the target unit's ledger), so one handle can be
/// junctioned to any number of units at once.
#[derive(Clone)]
pub enum JunctionAbility {
    Active(Arc<dyn ActiveAbility>),
    Passive(Arc<dyn PassiveAbility>),
}

impl JunctionAbility {
    pub fn active(ability: impl ActiveAbility + 'static) -> Self {
        JunctionAbility::Active(Arc::new(ability))
    }

    pub fn passive(ability: impl PassiveAbility + 'static) -> Self {
        JunctionAbility::Passive(Arc::new(ability))
    }

    pub fn id(&self) -> &str {
        match self {
            JunctionAbility::Active(ability) => ability.id(),
            JunctionAbility::Passive(ability) => ability.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            JunctionAbility::Active(ability) => ability.name(),
            JunctionAbility::Passive(ability) => ability.name(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, JunctionAbility::Active(_))
    }
}

impl std::fmt::Debug for JunctionAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            JunctionAbility::Active(_) => "Active",
            JunctionAbility::Passive(_) => "Passive",
        };
        f.debug_struct("JunctionAbility")
            .field("kind", &kind)
            .field("id", &self.id())
            .finish()
    }
}
