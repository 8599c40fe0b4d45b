//! Base attribute tags and the adjustments that modify them

use serde::{Deserialize, Serialize};

/// Base statistic a unit carries. Closed set; derived statistics
/// (power/agility/mind) are computed on the unit itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
}

impl Attribute {
    /// All base attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Intelligence,
        ]
    }
}

/// A signed delta applied to one base attribute, tagged with the identifier
/// of the ability that created it. Immutable once created; removed from the
/// ledger by revoking its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeAdjustment {
    pub source: String,
    pub attribute: Attribute,
    pub value: i32,
}

impl AttributeAdjustment {
    pub fn new(source: impl Into<String>, attribute: Attribute, value: i32) -> Self {
        Self {
            source: source.into(),
            attribute,
            value,
        }
    }
}
