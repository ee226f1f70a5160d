//! Attack orders that have passed the game rules
//!
//! An `Engagement` can only be built by checking the rules, so resolution
//! never sees an attack on a friendly territory or from a territory too weak
//! to attack. Distinctness comes for free from holding two `&mut` borrows.

use thiserror::Error;

use crate::combat::constants::MIN_ATTACK_TROOPS;
use crate::combat::dice::Dice;
use crate::combat::resolution::{resolve_round, BattleReport};
use crate::core::types::{Faction, TerritoryName, Troops};
use crate::map::territory::Territory;

/// Why an attack order was refused. No state changes when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Invalid attacker index {index}. Choose 0 to {}.", .count.saturating_sub(1))]
    AttackerOutOfRange { index: usize, count: usize },

    #[error("Invalid defender index {index}. Choose 0 to {}.", .count.saturating_sub(1))]
    DefenderOutOfRange { index: usize, count: usize },

    #[error("A territory cannot attack itself (index {index}).")]
    SelfAttack { index: usize },

    #[error("You cannot attack a territory of your own color ({owner}).")]
    FriendlyFire { owner: Faction },

    #[error("The attacking territory ({name}) needs at least {min} troops to attack (has {troops}).", min = MIN_ATTACK_TROOPS)]
    InsufficientTroops { name: TerritoryName, troops: Troops },
}

/// A checked attacker/defender pair, ready to fight one round
#[derive(Debug)]
pub struct Engagement<'a> {
    attacker: &'a mut Territory,
    defender: &'a mut Territory,
}

impl<'a> Engagement<'a> {
    /// Pair two territories for combat if the rules allow it
    pub fn new(
        attacker: &'a mut Territory,
        defender: &'a mut Territory,
    ) -> Result<Self, RuleViolation> {
        if attacker.is_allied_with(defender) {
            return Err(RuleViolation::FriendlyFire {
                owner: attacker.owner.clone(),
            });
        }
        if attacker.troops() < MIN_ATTACK_TROOPS {
            return Err(RuleViolation::InsufficientTroops {
                name: attacker.name.clone(),
                troops: attacker.troops(),
            });
        }
        Ok(Self { attacker, defender })
    }

    pub fn attacker(&self) -> &Territory {
        self.attacker
    }

    pub fn defender(&self) -> &Territory {
        self.defender
    }

    /// Roll for both sides (attacker first) and fight one round
    pub fn resolve(self, dice: &mut impl Dice) -> BattleReport {
        let attacker_roll = dice.roll();
        let defender_roll = dice.roll();
        self.resolve_with_rolls(attacker_roll, defender_roll)
    }

    /// Fight one round with rolls decided by the caller
    pub fn resolve_with_rolls(self, attacker_roll: u8, defender_roll: u8) -> BattleReport {
        resolve_round(self.attacker, self.defender, attacker_roll, defender_roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::LoadedDice;
    use crate::combat::resolution::BattleOutcome;

    #[test]
    fn test_same_owner_refused() {
        let mut a = Territory::new("A", "Red", 5);
        let mut b = Territory::new("B", "Red", 2);
        let err = Engagement::new(&mut a, &mut b).unwrap_err();
        assert_eq!(
            err,
            RuleViolation::FriendlyFire {
                owner: Faction::new("Red")
            }
        );
        assert_eq!(a.troops(), 5);
        assert_eq!(b.troops(), 2);
    }

    #[test]
    fn test_single_troop_attacker_refused() {
        let mut a = Territory::new("A", "Red", 1);
        let mut b = Territory::new("B", "Blue", 3);
        let err = Engagement::new(&mut a, &mut b).unwrap_err();
        assert!(matches!(err, RuleViolation::InsufficientTroops { troops: 1, .. }));
    }

    #[test]
    fn test_two_troops_may_attack() {
        let mut a = Territory::new("A", "Red", 2);
        let mut b = Territory::new("B", "Blue", 3);
        assert!(Engagement::new(&mut a, &mut b).is_ok());
    }

    #[test]
    fn test_resolve_rolls_attacker_first() {
        let mut a = Territory::new("A", "Red", 4);
        let mut b = Territory::new("B", "Blue", 3);
        let mut dice = LoadedDice::new([6, 1]);
        let report = Engagement::new(&mut a, &mut b).unwrap().resolve(&mut dice);
        assert_eq!(report.attacker_roll, 6);
        assert_eq!(report.defender_roll, 1);
        assert_eq!(report.outcome, BattleOutcome::AttackerVictory);
        assert_eq!(dice.rolls_made(), 2);
    }

    #[test]
    fn test_violation_messages() {
        let err = RuleViolation::AttackerOutOfRange { index: 7, count: 5 };
        assert_eq!(err.to_string(), "Invalid attacker index 7. Choose 0 to 4.");

        let err = RuleViolation::FriendlyFire {
            owner: Faction::new("Blue"),
        };
        assert_eq!(
            err.to_string(),
            "You cannot attack a territory of your own color (Blue)."
        );

        let err = RuleViolation::InsufficientTroops {
            name: TerritoryName::new("Chile"),
            troops: 1,
        };
        assert_eq!(
            err.to_string(),
            "The attacking territory (Chile) needs at least 2 troops to attack (has 1)."
        );
    }
}
