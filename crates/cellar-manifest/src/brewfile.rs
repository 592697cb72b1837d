//! Brewfile section model
//!
//! A Brewfile is a flat list of `tap`, `brew`, `cask`, and `mas` lines.
//! Parsing buckets lines by their leading keyword; rendering emits the
//! sections in a fixed order with each section sorted, which is the sole
//! canonical form the tool ever writes.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::io;

static TAP_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+/.+").unwrap());

/// The four kinds of manifest entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Tap,
    Brew,
    Cask,
    Mas,
}

impl EntryKind {
    /// The leading keyword of a manifest line of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Brew => "brew",
            Self::Cask => "cask",
            Self::Mas => "mas",
        }
    }

    /// The base manifest line for a name, without any suffixes.
    pub fn base_entry(&self, name: &str) -> String {
        format!("{} '{}'", self.keyword(), name)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Check that a tap name has the `user/repo` shape.
pub fn is_valid_tap(name: &str) -> bool {
    TAP_FORMAT.is_match(name)
}

/// The parsed sections of a Brewfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Brewfile {
    pub tap: Vec<String>,
    pub brew: Vec<String>,
    pub cask: Vec<String>,
    pub mas: Vec<String>,
}

impl Brewfile {
    /// Bucket the lines of `contents` by leading keyword.
    ///
    /// Comments, blank lines, and unrecognized lines are dropped; the
    /// canonical render does not carry them.
    pub fn parse(contents: &str) -> Self {
        let mut file = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with("tap ") {
                file.tap.push(line.to_string());
            } else if line.starts_with("brew ") {
                file.brew.push(line.to_string());
            } else if line.starts_with("cask ") {
                file.cask.push(line.to_string());
            } else if line.starts_with("mas ") {
                file.mas.push(line.to_string());
            } else {
                tracing::warn!(line, "skipping unrecognized manifest line");
            }
        }
        file
    }

    /// Read and parse the Brewfile at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(&contents))
    }

    /// Render the canonical text: sections in tap/brew/cask/mas order,
    /// each sorted, non-empty sections separated by one blank line, no
    /// trailing newline.
    pub fn render(&self) -> String {
        let mut sections = Vec::new();
        for lines in [&self.tap, &self.brew, &self.cask, &self.mas] {
            if lines.is_empty() {
                continue;
            }
            let mut sorted = lines.clone();
            sorted.sort();
            sections.push(sorted.join("\n"));
        }
        sections.join("\n\n")
    }

    /// Write the canonical render to `path` atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        io::write_atomic(path, self.render().as_bytes())
    }

    /// Whether the section for `kind` already has an entry for `name`.
    ///
    /// Matches on the base entry, so suffixed lines (args, restart, mas
    /// ids) still count.
    pub fn contains(&self, kind: EntryKind, name: &str) -> bool {
        let base = kind.base_entry(name);
        self.section(kind)
            .iter()
            .any(|line| line == &base || line.starts_with(&format!("{base},")))
    }

    /// The lines of the section for `kind`.
    pub fn section(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Tap => &self.tap,
            EntryKind::Brew => &self.brew,
            EntryKind::Cask => &self.cask,
            EntryKind::Mas => &self.mas,
        }
    }

    /// Append a line to the section for `kind`.
    pub fn push(&mut self, kind: EntryKind, line: String) {
        match kind {
            EntryKind::Tap => self.tap.push(line),
            EntryKind::Brew => self.brew.push(line),
            EntryKind::Cask => self.cask.push(line),
            EntryKind::Mas => self.mas.push(line),
        }
    }
}
