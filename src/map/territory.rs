//! A single ownable territory

use crate::core::types::{Faction, TerritoryName, Troops};

/// Every territory always holds at least this many troops
pub const MIN_TROOPS: Troops = 1;

/// A named region held by one faction
///
/// `troops` is private so the `>= MIN_TROOPS` invariant cannot be broken
/// from outside; the combat module mutates it through the crate-internal
/// helpers below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub name: TerritoryName,
    pub owner: Faction,
    troops: Troops,
}

impl Territory {
    /// Create a territory, raising the troop count to the minimum if needed
    pub fn new(name: impl Into<TerritoryName>, owner: impl Into<Faction>, troops: Troops) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops: troops.max(MIN_TROOPS),
        }
    }

    /// Create a territory from an unchecked troop count
    ///
    /// Returns the territory and whether the count had to be coerced.
    pub fn with_raw_troops(
        name: impl Into<TerritoryName>,
        owner: impl Into<Faction>,
        raw_troops: i64,
    ) -> (Self, bool) {
        let troops = Troops::try_from(raw_troops)
            .ok()
            .filter(|&t| t >= MIN_TROOPS);
        let coerced = troops.is_none();
        (Self::new(name, owner, troops.unwrap_or(MIN_TROOPS)), coerced)
    }

    pub fn troops(&self) -> Troops {
        self.troops
    }

    /// True if both territories belong to the same faction
    pub fn is_allied_with(&self, other: &Territory) -> bool {
        self.owner == other.owner
    }

    /// Detach `floor(troops / 2)` troops, returning how many left
    pub(crate) fn split_off_half(&mut self) -> Troops {
        let transfer = self.troops / 2;
        self.troops -= transfer;
        transfer
    }

    /// Lose one troop unless already at the minimum. Returns troops lost.
    pub(crate) fn lose_troop(&mut self) -> Troops {
        if self.troops > MIN_TROOPS {
            self.troops -= 1;
            1
        } else {
            0
        }
    }

    /// Hand this territory to a new owner with a fresh garrison
    pub(crate) fn occupy(&mut self, owner: Faction, garrison: Troops) {
        self.owner = owner;
        self.troops = garrison.max(MIN_TROOPS);
    }
}
