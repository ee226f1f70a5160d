pub mod console;
pub mod display;

pub use console::{is_affirmative, Console};
