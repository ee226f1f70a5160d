pub mod store;
pub mod territory;

pub use store::{reserve_territories, FactionStanding, TerritoryMap};
pub use territory::{Territory, MIN_TROOPS};
