//! Game setup and the interactive attack loop

pub mod session;
pub mod setup;

pub use session::{GameSession, SessionEnd, SessionSummary};
pub use setup::{build_map, read_territory_count, register_territory};
