//! The attack loop
//!
//! Each pass shows the map, takes an attack order, checks it, fights one
//! round and asks whether to go again. Bad orders are reported and the pass
//! starts over; nothing in here is fatal except I/O failure.

use std::io::{BufRead, Write};

use crate::combat::{BattleReport, Dice, RuleViolation};
use crate::core::error::Result;
use crate::core::types::Faction;
use crate::map::TerritoryMap;
use crate::ui::display::{narrate_battle, render_map, render_post_battle};
use crate::ui::{is_affirmative, Console};

/// Why a session stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player declined another attack
    PlayerQuit,
    /// Input ran out mid-game
    InputClosed,
    /// One faction owns the whole map
    Conquered(Faction),
    /// Two or more factions remain but nobody can attack
    Stalemate,
}

/// Totals for a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub battles: u32,
    pub attacker_victories: u32,
    pub defender_victories: u32,
    pub rejected_orders: u32,
}

/// What the player typed for an index prompt
enum IndexReply {
    Index(usize),
    Unreadable(String),
    Closed,
}

/// A game in progress: the map plus the dice that decide it
#[derive(Debug)]
pub struct GameSession<D> {
    map: TerritoryMap,
    dice: D,
    battles: u32,
    attacker_victories: u32,
    defender_victories: u32,
    rejected_orders: u32,
}

impl<D: Dice> GameSession<D> {
    pub fn new(map: TerritoryMap, dice: D) -> Self {
        Self {
            map,
            dice,
            battles: 0,
            attacker_victories: 0,
            defender_victories: 0,
            rejected_orders: 0,
        }
    }

    pub fn map(&self) -> &TerritoryMap {
        &self.map
    }

    /// Order one attack by index
    ///
    /// A refused order leaves the map untouched.
    pub fn attack(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> std::result::Result<BattleReport, RuleViolation> {
        let engagement = match self.map.engage(attacker, defender) {
            Ok(engagement) => engagement,
            Err(violation) => {
                self.rejected_orders += 1;
                tracing::debug!(attacker, defender, %violation, "Attack order refused");
                return Err(violation);
            }
        };

        let report = engagement.resolve(&mut self.dice);
        self.battles += 1;
        if report.attacker_won() {
            self.attacker_victories += 1;
        } else {
            self.defender_victories += 1;
        }
        Ok(report)
    }

    /// Whether the map leaves anything to fight over
    pub fn game_over(&self) -> Option<SessionEnd> {
        if let Some(faction) = self.map.conquering_faction() {
            return Some(SessionEnd::Conquered(faction.clone()));
        }
        if !self.map.has_legal_attack() {
            return Some(SessionEnd::Stalemate);
        }
        None
    }

    /// Totals so far, reported as ending with `end`
    pub fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            battles: self.battles,
            attacker_victories: self.attacker_victories,
            defender_victories: self.defender_victories,
            rejected_orders: self.rejected_orders,
        }
    }

    /// Run the interactive attack loop until the game ends
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionSummary> {
        let end = loop {
            if let Some(end) = self.game_over() {
                break end;
            }

            console.say(render_map(&self.map))?;
            console.say("\n--- Choose Your Attack ---")?;
            let last = self.map.len() - 1;

            let attacker = match read_index(
                console,
                &format!("Select the ATTACKING territory (0 to {}): ", last),
            )? {
                IndexReply::Index(i) if i < self.map.len() => i,
                IndexReply::Index(i) => {
                    self.reject(
                        console,
                        RuleViolation::AttackerOutOfRange {
                            index: i,
                            count: self.map.len(),
                        },
                    )?;
                    continue;
                }
                IndexReply::Unreadable(text) => {
                    self.rejected_orders += 1;
                    console.say(format!("[!] Invalid attacker index: '{}'.", text))?;
                    continue;
                }
                IndexReply::Closed => break SessionEnd::InputClosed,
            };

            let defender = match read_index(
                console,
                &format!("Select the DEFENDING territory (0 to {}): ", last),
            )? {
                IndexReply::Index(i) => i,
                IndexReply::Unreadable(text) => {
                    self.rejected_orders += 1;
                    console.say(format!("[!] Invalid defender index: '{}'.", text))?;
                    continue;
                }
                IndexReply::Closed => break SessionEnd::InputClosed,
            };

            let report = match self.attack(attacker, defender) {
                Ok(report) => report,
                Err(violation) => {
                    console.say(format!("[!] {}", violation))?;
                    continue;
                }
            };

            // Both indices were just validated by `attack`
            if let (Some(att), Some(def)) = (self.map.get(attacker), self.map.get(defender)) {
                console.say(narrate_battle(att, def, &report))?;
                console.say(render_post_battle(attacker, att, defender, def))?;
            }

            if let Some(end) = self.game_over() {
                break end;
            }

            match console.prompt("\nAttack again? (y/n): ")? {
                None => break SessionEnd::InputClosed,
                Some(reply) if !is_affirmative(&reply) => break SessionEnd::PlayerQuit,
                Some(_) => {}
            }
        };

        tracing::info!(
            ?end,
            battles = self.battles,
            rejected = self.rejected_orders,
            "Session finished"
        );
        Ok(self.summary(end))
    }

    fn reject<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        violation: RuleViolation,
    ) -> Result<()> {
        self.rejected_orders += 1;
        console.say(format!("[!] {}", violation))?;
        Ok(())
    }
}

fn read_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<IndexReply> {
    Ok(match console.prompt(label)? {
        None => IndexReply::Closed,
        Some(text) => match text.parse::<usize>() {
            Ok(i) => IndexReply::Index(i),
            Err(_) => IndexReply::Unreadable(text),
        },
    })
}
