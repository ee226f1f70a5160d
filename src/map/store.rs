//! Territory store - the ordered set of territories in play

use crate::combat::constants::MIN_ATTACK_TROOPS;
use crate::combat::engagement::{Engagement, RuleViolation};
use crate::core::config::MIN_TERRITORIES;
use crate::core::error::{Result, WarError};
use crate::core::types::Faction;
use crate::map::territory::Territory;

/// Reserve room for exactly `count` territories
///
/// Fails on counts below the minimum, and on allocation failure instead of
/// aborting, so `main` can report it and exit cleanly.
pub fn reserve_territories(count: usize) -> Result<Vec<Territory>> {
    if count < MIN_TERRITORIES {
        return Err(WarError::InvalidTerritoryCount {
            given: count.to_string(),
            min: MIN_TERRITORIES,
        });
    }
    let mut territories = Vec::new();
    territories.try_reserve_exact(count)?;
    Ok(territories)
}

/// One faction's holdings
///
/// `troops` is summed wide: a faction can hold several territories at the
/// `Troops` maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionStanding {
    pub owner: Faction,
    pub territories: usize,
    pub troops: u64,
}

/// All territories in play, in registration order
///
/// Indices are stable for the whole game: territories are never added or
/// removed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
}

impl TerritoryMap {
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self> {
        if territories.len() < MIN_TERRITORIES {
            return Err(WarError::InvalidTerritoryCount {
                given: territories.len().to_string(),
                min: MIN_TERRITORIES,
            });
        }
        Ok(Self { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Two distinct mutable territories
    fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Territory, &mut Territory)> {
        if first == second || first >= self.len() || second >= self.len() {
            return None;
        }
        if first < second {
            let (left, right) = self.territories.split_at_mut(second);
            Some((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(first);
            Some((&mut right[0], &mut left[second]))
        }
    }

    /// Check an attack order and borrow the two territories for combat
    ///
    /// Checks run in order: attacker index, defender index (including
    /// attacking itself), same owner, attacker strength.
    pub fn engage(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> std::result::Result<Engagement<'_>, RuleViolation> {
        let count = self.len();
        if attacker >= count {
            return Err(RuleViolation::AttackerOutOfRange {
                index: attacker,
                count,
            });
        }
        if defender >= count {
            return Err(RuleViolation::DefenderOutOfRange {
                index: defender,
                count,
            });
        }
        if attacker == defender {
            return Err(RuleViolation::SelfAttack { index: attacker });
        }

        let Some((attacking, defending)) = self.pair_mut(attacker, defender) else {
            return Err(RuleViolation::SelfAttack { index: attacker });
        };
        Engagement::new(attacking, defending)
    }

    /// The faction holding every territory, once the map is conquered
    pub fn conquering_faction(&self) -> Option<&Faction> {
        let first = &self.territories.first()?.owner;
        self.territories
            .iter()
            .all(|t| &t.owner == first)
            .then_some(first)
    }

    /// Whether any attack would pass validation
    ///
    /// With no adjacency, any territory that has the troops to attack can
    /// reach an enemy as long as two factions remain.
    pub fn has_legal_attack(&self) -> bool {
        self.conquering_faction().is_none()
            && self
                .territories
                .iter()
                .any(|t| t.troops() >= MIN_ATTACK_TROOPS)
    }

    /// Per-faction totals, most territories first, then most troops
    pub fn standings(&self) -> Vec<FactionStanding> {
        let mut standings: Vec<FactionStanding> = Vec::new();
        for territory in &self.territories {
            match standings.iter_mut().find(|s| s.owner == territory.owner) {
                Some(standing) => {
                    standing.territories += 1;
                    standing.troops += u64::from(territory.troops());
                }
                None => standings.push(FactionStanding {
                    owner: territory.owner.clone(),
                    territories: 1,
                    troops: u64::from(territory.troops()),
                }),
            }
        }
        // Stable sort keeps registration order for full ties
        standings.sort_by(|a, b| {
            b.territories
                .cmp(&a.territories)
                .then(b.troops.cmp(&a.troops))
        });
        standings
    }
}
