//! Combat constants - all tunable values in one place

use crate::core::types::Troops;

/// Faces on each die. Rolls are uniform over `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

/// Lowest face on a die
pub const DIE_MIN: u8 = 1;

/// Troops a territory needs before it may attack
///
/// One troop always stays behind, so an attacker needs at least one more
/// to send.
pub const MIN_ATTACK_TROOPS: Troops = 2;

/// Troops lost by the attacker when the defender holds
pub const REPULSE_LOSS: Troops = 1;
