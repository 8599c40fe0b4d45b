//! Junction Arena - combat units with junctioned ability composition

pub mod ability;
pub mod attributes;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod events;
pub mod ledger;
pub mod rng;
pub mod unit;

pub use ability::{Ability, ActiveAbility, JunctionAbility, PassiveAbility};
pub use attributes::{Attribute, AttributeAdjustment};
pub use error::{JunctionError, Result};
pub use events::{CombatEvent, EventLog, EventSink, TraceSink};
pub use ledger::AdjustmentLedger;
pub use rng::{Dice, RandDice, ScriptedDice};
pub use unit::CombatUnit;
