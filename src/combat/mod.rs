pub mod constants;
pub mod dice;
pub mod engagement;
pub mod resolution;

pub use dice::{clock_seed, Dice, LoadedDice, RandomDice};
pub use engagement::{Engagement, RuleViolation};
pub use resolution::{attacker_wins, BattleOutcome, BattleReport};
