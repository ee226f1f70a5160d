//! Text rendering for the map, battles and end-of-game summary
//!
//! Everything here returns a `String`; the caller decides where it goes.

use std::fmt::Write;

use crate::combat::{BattleOutcome, BattleReport};
use crate::map::{FactionStanding, Territory, TerritoryMap};
use crate::simulation::session::{SessionEnd, SessionSummary};

/// One territory as a single line
pub fn render_territory(territory: &Territory) -> String {
    format!(
        "  -> Name: {} | Color: {} | Troops: {}",
        territory.name,
        territory.owner,
        territory.troops()
    )
}

/// The full map, one indexed line per territory
pub fn render_map(map: &TerritoryMap) -> String {
    let mut out = String::from("\n--- Current Map ---\n");
    for (i, territory) in map.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i, render_territory(territory));
    }
    out.push_str("-------------------");
    out
}

/// Play-by-play of one round
///
/// Takes the territories as they are after the round.
pub fn narrate_battle(attacker: &Territory, defender: &Territory, report: &BattleReport) -> String {
    let mut out = String::from("\n--- Battle Simulation ---\n");
    let _ = writeln!(out, "Attacker ({}) rolls {}.", attacker.name, report.attacker_roll);
    let _ = writeln!(out, "Defender ({}) rolls {}.", defender.name, report.defender_roll);

    match report.outcome {
        BattleOutcome::AttackerVictory => {
            let _ = writeln!(out, "\n*** ATTACKER VICTORY! ({}) ***", attacker.owner);
            let _ = writeln!(
                out,
                "[!] {} {} from {} moved into {}, taken from {}.",
                report.troops_transferred,
                troop_word(report.troops_transferred.into()),
                attacker.name,
                defender.name,
                report.defender_previous_owner
            );
        }
        BattleOutcome::DefenderVictory => {
            let _ = writeln!(out, "\n*** DEFENDER VICTORY! ({}) ***", defender.owner);
            if report.attacker_losses > 0 {
                let _ = writeln!(
                    out,
                    "[!] The attacker ({}) lost {} {}.",
                    attacker.name,
                    report.attacker_losses,
                    troop_word(report.attacker_losses.into())
                );
            } else {
                let _ = writeln!(
                    out,
                    "[!] The attacker ({}) kept its last troop (minimum).",
                    attacker.name
                );
            }
        }
    }
    out.push_str("-------------------------");
    out
}

/// The two territories that just fought
pub fn render_post_battle(
    attacker_index: usize,
    attacker: &Territory,
    defender_index: usize,
    defender: &Territory,
) -> String {
    format!(
        "\n[Post-Battle]\nAttacker [{}]: {}\nDefender [{}]: {}",
        attacker_index,
        render_territory(attacker),
        defender_index,
        render_territory(defender)
    )
}

/// Faction table, in the order given
pub fn render_standings(standings: &[FactionStanding]) -> String {
    let mut out = String::from("\n--- Standings ---\n");
    for (rank, standing) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {} {}, {} {}",
            rank + 1,
            standing.owner,
            standing.territories,
            if standing.territories == 1 { "territory" } else { "territories" },
            standing.troops,
            troop_word(standing.troops)
        );
    }
    out.push_str("-----------------");
    out
}

/// Closing lines for a finished session
pub fn render_summary(summary: &SessionSummary) -> String {
    let ending = match &summary.end {
        SessionEnd::Conquered(faction) => format!("{} conquered every territory.", faction),
        SessionEnd::Stalemate => "Stalemate: no territory has enough troops to attack.".to_string(),
        SessionEnd::PlayerQuit => "Campaign ended by the player.".to_string(),
        SessionEnd::InputClosed => "Input closed; campaign ended.".to_string(),
    };
    format!(
        "\n{}\nBattles fought: {} (attackers won {}, defenders held {}). Orders refused: {}.",
        ending,
        summary.battles,
        summary.attacker_victories,
        summary.defender_victories,
        summary.rejected_orders
    )
}

fn troop_word(count: u64) -> &'static str {
    if count == 1 {
        "troop"
    } else {
        "troops"
    }
}
