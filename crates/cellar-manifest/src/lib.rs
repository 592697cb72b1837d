//! Brewfile parsing, rendering, and write-back
//!
//! The manifest collaborator for cellar: models the four Brewfile sections,
//! parses brew lines back into resolver entries, and persists the canonical
//! render atomically.

pub mod brewfile;
pub mod error;
pub mod io;
pub mod line;

pub use brewfile::{is_valid_tap, Brewfile, EntryKind};
pub use error::{Error, Result};
pub use line::{parse_brew_line, parse_brew_lines};
