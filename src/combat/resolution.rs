//! Attack round resolution
//!
//! One die each. The attacker must beat the defender outright; a tie holds
//! the line. A winning attacker takes the territory and moves half its
//! troops (rounded down) in as the new garrison. A losing attacker loses
//! one troop, but never its last.

use crate::combat::constants::REPULSE_LOSS;
use crate::core::types::{Faction, Troops};
use crate::map::territory::Territory;

/// Which side carried the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Attacker rolled higher and took the territory
    AttackerVictory,
    /// Defender rolled higher or tied and held
    DefenderVictory,
}

/// Everything that happened in one attack round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub attacker_roll: u8,
    pub defender_roll: u8,
    /// Owner of the defending territory before the round
    pub defender_previous_owner: Faction,
    /// Troops moved into the conquered territory (0 if the defender held)
    pub troops_transferred: Troops,
    /// Troops the attacker lost to a failed attack
    pub attacker_losses: Troops,
    /// Attacker troop count after the round
    pub attacker_troops: Troops,
    /// Defender troop count after the round
    pub defender_troops: Troops,
}

impl BattleReport {
    pub fn attacker_won(&self) -> bool {
        self.outcome == BattleOutcome::AttackerVictory
    }
}

/// Attacker needs a strictly higher roll
pub fn attacker_wins(attacker_roll: u8, defender_roll: u8) -> bool {
    attacker_roll > defender_roll
}

/// Apply one round to the two territories in place
///
/// Callers must have checked the rules; `Engagement` is the only way in
/// from outside the crate.
pub(crate) fn resolve_round(
    attacker: &mut Territory,
    defender: &mut Territory,
    attacker_roll: u8,
    defender_roll: u8,
) -> BattleReport {
    let defender_previous_owner = defender.owner.clone();

    let (outcome, troops_transferred, attacker_losses) =
        if attacker_wins(attacker_roll, defender_roll) {
            let transfer = attacker.split_off_half();
            // The old garrison is gone; the new one is exactly what moved in
            defender.occupy(attacker.owner.clone(), transfer);
            (BattleOutcome::AttackerVictory, transfer, 0)
        } else {
            let mut lost = 0;
            for _ in 0..REPULSE_LOSS {
                lost += attacker.lose_troop();
            }
            (BattleOutcome::DefenderVictory, 0, lost)
        };

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_roll,
        defender_roll,
        ?outcome,
        troops_transferred,
        attacker_losses,
        "Attack resolved"
    );

    BattleReport {
        outcome,
        attacker_roll,
        defender_roll,
        defender_previous_owner,
        troops_transferred,
        attacker_losses,
        attacker_troops: attacker.troops(),
        defender_troops: defender.troops(),
    }
}
