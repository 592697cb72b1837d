//! Manifest entries and their canonical line rendering

use std::fmt;

/// How `brew bundle` should restart a package's service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartService {
    /// Restart every time bundle runs (`restart_service: true`)
    Always,
    /// Restart only after changes and updates (`restart_service: :changed`)
    Changed,
}

impl RestartService {
    /// Parse the CLI flag value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(Self::Always),
            "changed" => Some(Self::Changed),
            _ => None,
        }
    }
}

impl fmt::Display for RestartService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "true"),
            Self::Changed => write!(f, ":changed"),
        }
    }
}

/// The logical content of one brew manifest line.
///
/// Distinct from a metadata record: an entry is what gets written to the
/// manifest, a record is what the cache knows about a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub restart: Option<RestartService>,
    pub args: Vec<String>,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        restart: Option<RestartService>,
        args: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            restart,
            args,
        }
    }

    /// A bare entry with no args and no restart mode.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None, Vec::new())
    }

    /// Render the canonical manifest line for this entry.
    ///
    /// Appends, in fixed order, the args list (only when non-empty) and the
    /// restart-service suffix (only when set). Ordering across entries is
    /// the caller's concern; rendering is pure and total.
    pub fn format(&self) -> String {
        let mut line = format!("brew '{}'", self.name);

        if !self.args.is_empty() {
            let args = self
                .args
                .iter()
                .map(|arg| format!("'{arg}'"))
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(", args: [{args}]"));
        }

        if let Some(restart) = self.restart {
            line.push_str(&format!(", restart_service: {restart}"));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_bare_entry() {
        assert_eq!(Entry::named("a2ps").format(), "brew 'a2ps'");
    }

    #[test]
    fn formats_args() {
        let entry = Entry::new(
            "vim",
            None,
            vec!["HEAD".into(), "with-override-system-vi".into()],
        );
        assert_eq!(
            entry.format(),
            "brew 'vim', args: ['HEAD', 'with-override-system-vi']"
        );
    }

    #[test]
    fn formats_restart_always() {
        let entry = Entry::new("chunkwm", Some(RestartService::Always), Vec::new());
        assert_eq!(entry.format(), "brew 'chunkwm', restart_service: true");
    }

    #[test]
    fn formats_restart_changed() {
        let entry = Entry::new("skhd", Some(RestartService::Changed), Vec::new());
        assert_eq!(entry.format(), "brew 'skhd', restart_service: :changed");
    }

    #[test]
    fn formats_args_before_restart() {
        let entry = Entry::new(
            "mpd",
            Some(RestartService::Changed),
            vec!["with-libmodplug".into()],
        );
        assert_eq!(
            entry.format(),
            "brew 'mpd', args: ['with-libmodplug'], restart_service: :changed"
        );
    }

    #[test]
    fn parses_restart_flag_values() {
        assert_eq!(RestartService::parse("always"), Some(RestartService::Always));
        assert_eq!(
            RestartService::parse("changed"),
            Some(RestartService::Changed)
        );
        assert_eq!(RestartService::parse("sometimes"), None);
    }
}
