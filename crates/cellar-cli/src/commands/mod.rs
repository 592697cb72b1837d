//! Command implementations for cellar-cli

pub mod add;
pub mod clean;
pub mod refresh;

pub use add::{run_add, AddRequest};
pub use clean::run_clean;
pub use refresh::run_refresh;
