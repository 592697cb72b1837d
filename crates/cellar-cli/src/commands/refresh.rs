//! Refresh command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;

use cellar_brew::{refresh, BrewQuery, SqliteStore};

use crate::config::Config;
use crate::error::Result;

/// Run the refresh command
///
/// Invokes the configured query command and bulk-writes the metadata cache,
/// optionally saving the raw query output as a snapshot file.
pub fn run_refresh(config: &Config, snapshot: Option<&Path>) -> Result<()> {
    let store = SqliteStore::open(&config.cache.path)?;
    let runner = BrewQuery::new(&config.query.command, config.query.args.clone());

    let outcome = refresh(&store, &runner)?;

    if let Some(path) = snapshot {
        fs::write(path, &outcome.raw).map_err(|e| cellar_brew::Error::io(path, e))?;
        println!(
            "{} Saved snapshot to {}.",
            "OK".green().bold(),
            path.display()
        );
    }

    println!(
        "{} Cached info for {} packages.",
        "OK".green().bold(),
        outcome.records
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_brew::{MetadataStore, Snapshot};
    use cellar_test_utils::TestBrewfile;

    const INFO_JSON: &str =
        r#"[{"name": "a2ps", "full_name": "a2ps"}, {"name": "vim", "full_name": "vim", "dependencies": ["python"]}]"#;

    fn config_with_query(dir: &TestBrewfile, command: &str, args: Vec<String>) -> Config {
        let mut config = Config::default();
        config.manifest.path = dir.path();
        config.cache.path = dir.sibling("cache.sqlite");
        config.query.command = command.to_string();
        config.query.args = args;
        config
    }

    #[test]
    fn refresh_populates_cache_from_query_output() {
        let dir = TestBrewfile::with_contents("");
        let info_path = dir.sibling("info.json");
        fs::write(&info_path, INFO_JSON).unwrap();
        let config = config_with_query(
            &dir,
            "cat",
            vec![info_path.to_string_lossy().into_owned()],
        );

        run_refresh(&config, None).unwrap();

        let store = SqliteStore::open(&config.cache.path).unwrap();
        assert_eq!(store.get("vim").unwrap().dependencies, vec!["python"]);
    }

    #[test]
    fn refresh_saves_snapshot_when_asked() {
        let dir = TestBrewfile::with_contents("");
        let info_path = dir.sibling("info.json");
        fs::write(&info_path, INFO_JSON).unwrap();
        let config = config_with_query(
            &dir,
            "cat",
            vec![info_path.to_string_lossy().into_owned()],
        );

        let snapshot_path = dir.sibling("snapshot.json");
        run_refresh(&config, Some(&snapshot_path)).unwrap();

        let snapshot = Snapshot::read(&snapshot_path).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.find("a2ps").unwrap().name, "a2ps");
    }

    #[test]
    fn refresh_fails_when_query_command_fails() {
        let dir = TestBrewfile::with_contents("");
        let config = config_with_query(&dir, "false", vec![]);

        let err = run_refresh(&config, None).unwrap_err();
        assert!(err.to_string().contains("Fetching package metadata failed"));
    }
}
