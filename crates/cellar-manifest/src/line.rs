//! Recovering entries from canonical brew lines
//!
//! Seeding the resolver from an existing Brewfile must preserve the args
//! and restart mode a user declared earlier, so brew lines are parsed back
//! into full [`Entry`] values rather than bare names.

use std::sync::LazyLock;

use regex::Regex;

use cellar_brew::{Entry, RestartService};

static BREW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^brew '(?P<name>[^']+)'(?:, args: \[(?P<args>[^\]]*)\])?(?:, restart_service: (?P<restart>true|:changed))?$",
    )
    .unwrap()
});

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']*)'").unwrap());

/// Parse a canonical brew line into an [`Entry`].
///
/// Returns `None` for lines that are not canonical brew lines; callers
/// treat those as foreign and leave them alone.
pub fn parse_brew_line(line: &str) -> Option<Entry> {
    let captures = BREW_LINE.captures(line.trim())?;

    let name = captures.name("name")?.as_str().to_string();

    let args = captures
        .name("args")
        .map(|m| {
            QUOTED
                .captures_iter(m.as_str())
                .map(|c| c[1].to_string())
                .collect()
        })
        .unwrap_or_default();

    let restart = captures.name("restart").map(|m| match m.as_str() {
        "true" => RestartService::Always,
        _ => RestartService::Changed,
    });

    Some(Entry::new(name, restart, args))
}

/// Parse every canonical brew line in `lines`, skipping foreign ones.
pub fn parse_brew_lines(lines: &[String]) -> Vec<Entry> {
    lines
        .iter()
        .filter_map(|line| parse_brew_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_line() {
        let entry = parse_brew_line("brew 'a2ps'").unwrap();
        assert_eq!(entry, Entry::named("a2ps"));
    }

    #[test]
    fn parses_args() {
        let entry =
            parse_brew_line("brew 'vim', args: ['HEAD', 'with-override-system-vi']").unwrap();
        assert_eq!(entry.name, "vim");
        assert_eq!(entry.args, vec!["HEAD", "with-override-system-vi"]);
        assert_eq!(entry.restart, None);
    }

    #[test]
    fn parses_restart_modes() {
        let entry = parse_brew_line("brew 'chunkwm', restart_service: true").unwrap();
        assert_eq!(entry.restart, Some(RestartService::Always));

        let entry = parse_brew_line("brew 'skhd', restart_service: :changed").unwrap();
        assert_eq!(entry.restart, Some(RestartService::Changed));
    }

    #[test]
    fn parses_args_and_restart_together() {
        let entry =
            parse_brew_line("brew 'mpd', args: ['with-libmodplug'], restart_service: :changed")
                .unwrap();
        assert_eq!(entry.args, vec!["with-libmodplug"]);
        assert_eq!(entry.restart, Some(RestartService::Changed));
    }

    #[test]
    fn round_trips_with_format() {
        let lines = [
            "brew 'a2ps'",
            "brew 'vim', args: ['HEAD']",
            "brew 'mpd', args: ['a', 'b'], restart_service: true",
            "brew 'skhd', restart_service: :changed",
        ];
        for line in lines {
            assert_eq!(parse_brew_line(line).unwrap().format(), line);
        }
    }

    #[test]
    fn rejects_foreign_lines() {
        assert_eq!(parse_brew_line("cask 'firefox'"), None);
        assert_eq!(parse_brew_line("# comment"), None);
        assert_eq!(parse_brew_line("brew vim"), None);
    }

    #[test]
    fn parses_many_lines_skipping_foreign() {
        let lines = vec![
            "brew 'a2ps'".to_string(),
            "not a brew line".to_string(),
            "brew 'vim', args: ['HEAD']".to_string(),
        ];
        let entries = parse_brew_lines(&lines);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a2ps");
        assert_eq!(entries[1].name, "vim");
    }
}
