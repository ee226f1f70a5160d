//! Territory War - Entry Point
//!
//! Parses flags, loads the optional scenario file, seeds the dice once,
//! builds the map and hands control to the attack loop.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use territory_war::combat::{clock_seed, RandomDice};
use territory_war::core::config::{GameConfig, CLASSIC_TERRITORY_COUNT};
use territory_war::core::error::Result;
use territory_war::simulation::{build_map, GameSession};
use territory_war::ui::display::{render_map, render_standings, render_summary};
use territory_war::ui::Console;

/// Territory War - pick an attacker, pick a defender, roll the dice
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Turn-based territory conquest simulator")]
struct Args {
    /// Number of territories to register (skips the prompt)
    #[arg(long, conflicts_with = "classic")]
    territories: Option<usize>,

    /// Play the classic fixed-size game of 5 territories
    #[arg(long)]
    classic: bool,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// TOML scenario file with preset territories and options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {}", e);
            eprintln!("[!] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so they never interleave with the game on stdout
    let default_filter = if verbose {
        "territory_war=debug"
    } else {
        "territory_war=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::new(),
    };
    apply_args(config, args)
}

/// Flags win over the file; `--classic` pins the count at 5
fn apply_args(mut config: GameConfig, args: &Args) -> Result<GameConfig> {
    let territories = if args.classic {
        Some(CLASSIC_TERRITORY_COUNT)
    } else {
        args.territories
    };
    config.override_with(territories, args.seed);
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, "Dice seeded");
    let dice = RandomDice::seeded(seed);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.say("=== TERRITORY WAR ===")?;
    console.say("Register your territories, then attack until one color rules them all.")?;

    let map = build_map(&mut console, &config)?;
    tracing::info!("Territory War starting with {} territories", map.len());

    let mut session = GameSession::new(map, dice);
    let summary = session.run(&mut console)?;

    console.say(render_map(session.map()))?;
    console.say(render_standings(&session.map().standings()))?;
    console.say(render_summary(&summary))?;
    console.say("\nSimulation finished. Until the next campaign!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use territory_war::core::error::WarError;

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("territory-war").chain(flags.iter().copied())).unwrap()
    }

    const PRESETS: &str = r#"
        seed = 3
        [[territory]]
        name = "A"
        owner = "Red"
        [[territory]]
        name = "B"
        owner = "Blue"
    "#;

    #[test]
    fn test_no_flags_leaves_count_to_prompt() {
        let config = apply_args(GameConfig::new(), &args(&[])).unwrap();
        assert_eq!(config.territory_count(), None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_classic_overrides_file_count() {
        let file = GameConfig::from_toml_str("territories = 3\nseed = 9").unwrap();
        let config = apply_args(file, &args(&["--classic", "--seed", "1"])).unwrap();
        assert_eq!(config.territory_count(), Some(CLASSIC_TERRITORY_COUNT));
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_territories_flag_overrides_file_count() {
        let file = GameConfig::from_toml_str("territories = 3").unwrap();
        let config = apply_args(file, &args(&["--territories", "7"])).unwrap();
        assert_eq!(config.territory_count(), Some(7));
    }

    #[test]
    fn test_presets_imply_count() {
        let file = GameConfig::from_toml_str(PRESETS).unwrap();
        let config = apply_args(file, &args(&[])).unwrap();
        assert_eq!(config.territory_count(), Some(2));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_classic_against_presets_is_rejected() {
        let file = GameConfig::from_toml_str(PRESETS).unwrap();
        let result = apply_args(file, &args(&["--classic"]));
        assert!(matches!(result, Err(WarError::InvalidConfig(_))));
    }

    #[test]
    fn test_count_below_minimum_is_rejected() {
        let result = apply_args(GameConfig::new(), &args(&["--territories", "1"]));
        assert!(matches!(
            result,
            Err(WarError::InvalidTerritoryCount { min: 2, .. })
        ));
    }

    #[test]
    fn test_classic_conflicts_with_territories() {
        let parsed = Args::try_parse_from(["territory-war", "--classic", "--territories", "3"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(&args(&["--config", "/nonexistent/scenario.toml"]));
        assert!(matches!(result, Err(WarError::ConfigRead { .. })));
    }
}
