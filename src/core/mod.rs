pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, TerritorySpec};
pub use error::{Result, WarError};
pub use types::{BoundedText, Faction, TerritoryName, Troops};
