//! Territory War - turn-based territory conquest with dice combat

pub mod combat;
pub mod core;
pub mod map;
pub mod simulation;
pub mod ui;
