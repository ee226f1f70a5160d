//! Building the territory map before play starts
//!
//! Any failure here is fatal: the game never starts on a partial map.

use std::io::{BufRead, Write};

use crate::core::config::{GameConfig, MIN_TERRITORIES};
use crate::core::error::{Result, WarError};
use crate::core::types::{Faction, TerritoryName};
use crate::map::{reserve_territories, Territory, TerritoryMap};
use crate::ui::Console;

/// Build the map from presets, or by registering territories at the console
pub fn build_map<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<TerritoryMap> {
    if !config.presets.is_empty() {
        return map_from_presets(console, config);
    }

    let count = match config.territory_count() {
        Some(n) => n,
        None => read_territory_count(console)?,
    };

    let mut territories = reserve_territories(count)?;
    for index in 0..count {
        territories.push(register_territory(console, index)?);
    }
    tracing::info!("Registered {} territories", count);
    TerritoryMap::from_territories(territories)
}

fn map_from_presets<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<TerritoryMap> {
    let mut territories = reserve_territories(config.presets.len())?;
    for spec in &config.presets {
        let (territory, coerced) =
            Territory::with_raw_troops(spec.name.clone(), spec.owner.clone(), spec.troops);
        if coerced {
            tracing::warn!(territory = %spec.name, troops = spec.troops, "Preset troops coerced to 1");
            console.say(format!(
                "[!] Invalid troops for {} ({}). Setting 1 troop.",
                spec.name, spec.troops
            ))?;
        }
        territories.push(territory);
    }
    tracing::info!("Loaded {} preset territories", territories.len());
    TerritoryMap::from_territories(territories)
}

/// Ask how many territories to register
pub fn read_territory_count<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<usize> {
    let reply = console
        .prompt("How many territories will be registered? ")?
        .ok_or(WarError::UnexpectedEof)?;

    match reply.parse::<usize>() {
        Ok(n) if n >= MIN_TERRITORIES => Ok(n),
        _ => Err(WarError::InvalidTerritoryCount {
            given: reply,
            min: MIN_TERRITORIES,
        }),
    }
}

/// Prompt for one territory's name, color and troops
///
/// Blank names and colors are asked again. Over-long text is cut to size
/// with a warning. Troops that are not a positive integer become 1.
pub fn register_territory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    index: usize,
) -> Result<Territory> {
    console.say(format!("\n--- Register Territory {} ---", index + 1))?;

    let raw_name = console
        .prompt_non_empty("Name: ")?
        .ok_or(WarError::UnexpectedEof)?;
    let (name, truncated) = TerritoryName::truncating(&raw_name);
    if truncated {
        console.say(format!(
            "[!] Name too long. Keeping the first {} characters: {}",
            TerritoryName::capacity(),
            name
        ))?;
    }

    let raw_color = console
        .prompt_non_empty("Army color (e.g. Blue, Red): ")?
        .ok_or(WarError::UnexpectedEof)?;
    let (owner, truncated) = Faction::truncating(&raw_color);
    if truncated {
        console.say(format!(
            "[!] Color too long. Keeping the first {} characters: {}",
            Faction::capacity(),
            owner
        ))?;
    }

    let raw_troops = console
        .prompt("Number of troops: ")?
        .ok_or(WarError::UnexpectedEof)?;
    let troops = raw_troops.parse::<i64>().unwrap_or(0);
    let (territory, coerced) = Territory::with_raw_troops(name, owner, troops);
    if coerced {
        tracing::warn!(input = %raw_troops, "Invalid troop count, using 1");
        console.say("[!] Invalid troops. Setting 1 troop.")?;
    }

    Ok(territory)
}
