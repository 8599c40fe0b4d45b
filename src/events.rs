//! Combat events and narration sinks
//!
//! Actions describe what they did as structured events. Rendering to text
//! and delivery (console, log, replay buffer) stay outside the domain core:
//! callers inject whatever sink they want.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One thing that happened during an ability invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A named ability was cast at a target.
    Cast {
        user: String,
        ability: String,
        target: String,
    },
    /// A plain attack was launched at a target.
    Attacked { attacker: String, target: String },
    /// A target recovered health.
    Healed { target: String, amount: i32 },
    /// A target lost health.
    Damaged { target: String, amount: i32 },
    /// A unit tried to use an ability it has not junctioned.
    NoSuchAbility { unit: String, ability: String },
}

impl std::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatEvent::Cast {
                user,
                ability,
                target,
            } => write!(f, "{} casts {} on {}!", user, ability, target),
            CombatEvent::Attacked { attacker, target } => {
                write!(f, "{} attacks {}!", attacker, target)
            }
            CombatEvent::Healed { target, amount } => {
                write!(f, "{} heals {} health!", target, amount)
            }
            CombatEvent::Damaged { target, amount } => {
                write!(f, "{} takes {} damage!", target, amount)
            }
            CombatEvent::NoSuchAbility { unit, ability } => {
                write!(f, "{} has no ability \"{}\"", unit, ability)
            }
        }
    }
}

/// Receives events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

/// Records events in order. Useful for tests, replays, and post-fight
/// reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

/// Forwards rendered narration lines to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl EventSink for TraceSink {
    fn emit(&mut self, event: CombatEvent) {
        tracing::info!("{}", event);
    }
}
