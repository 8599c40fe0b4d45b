//! Junction system constants - all tunable values in one place

/// Default value every base attribute starts at.
pub const BASE_ATTRIBUTE: i32 = 10;

/// Heal restores a uniform roll in this inclusive range.
pub const HEAL_ROLL_MIN: i32 = 5;
pub const HEAL_ROLL_MAX: i32 = 10;

/// Attack combines a roll in this inclusive range with the attacker's power.
pub const ATTACK_ROLL_MIN: i32 = 1;
pub const ATTACK_ROLL_MAX: i32 = 10;

/// Strength adjustment applied while Strength Up stays junctioned.
pub const STRENGTH_UP_BONUS: i32 = 10;
