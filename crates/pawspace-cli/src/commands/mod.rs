//! Command implementations.

pub mod assess;
pub mod config;
pub mod rules;

pub use self::assess::{execute_booking, execute_space};
pub use self::config::execute_config;
pub use self::rules::execute_rules;
