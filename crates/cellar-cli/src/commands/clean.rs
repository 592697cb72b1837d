//! Clean command implementation
//!
//! Rewrites the Brewfile in canonical sorted form without any dependency
//! expansion. Every brew entry must still have a cache record; a stale
//! cache aborts the rewrite before anything is written.

use colored::Colorize;

use cellar_brew::{MetadataStore, SqliteStore};
use cellar_manifest::{parse_brew_lines, Brewfile};

use crate::config::Config;
use crate::error::Result;

/// Run the clean command
pub fn run_clean(config: &Config, dry_run: bool) -> Result<()> {
    let manifest_path = &config.manifest.path;
    let file = Brewfile::load(manifest_path)?;

    let store = SqliteStore::open(&config.cache.path)?;
    for entry in parse_brew_lines(&file.brew) {
        store.get(&entry.name)?;
    }

    if dry_run {
        println!("{}", file.render());
    } else {
        file.write(manifest_path)?;
        println!(
            "{} Cleaned {}.",
            "OK".green().bold(),
            manifest_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use cellar_test_utils::{TestBrewfile, TestCache};
    use pretty_assertions::assert_eq;

    const CONTENTS: &str = "
tap 'homebrew/bundle'
brew 'a2ps'
tap 'homebrew/core'
cask 'google-chrome'
mas 'Xcode', id: 497799835
cask 'firefox'
# some comment
";

    fn config_for(file: &TestBrewfile, cache: &TestCache) -> Config {
        let mut config = Config::default();
        config.manifest.path = file.path();
        config.cache.path = cache.path();
        config
    }

    #[test]
    fn rewrites_sorted_sections() {
        let file = TestBrewfile::with_contents(CONTENTS);
        let cache = TestCache::new();
        cache.add_brews_by_name(&["a2ps"]);
        let config = config_for(&file, &cache);

        run_clean(&config, false).unwrap();

        file.assert_eq(
            "tap 'homebrew/bundle'
tap 'homebrew/core'

brew 'a2ps'

cask 'firefox'
cask 'google-chrome'

mas 'Xcode', id: 497799835",
        );
    }

    #[test]
    fn aborts_when_brew_entry_missing_from_cache() {
        let file = TestBrewfile::with_contents(CONTENTS);
        let cache = TestCache::new();
        let config = config_for(&file, &cache);

        let err = run_clean(&config, false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Brew(cellar_brew::Error::PackageNotFound { ref name }) if name == "a2ps"
        ));
        assert_eq!(file.contents(), CONTENTS);
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let file = TestBrewfile::with_contents(CONTENTS);
        let cache = TestCache::new();
        cache.add_brews_by_name(&["a2ps"]);
        let config = config_for(&file, &cache);

        run_clean(&config, true).unwrap();

        assert_eq!(file.contents(), CONTENTS);
    }
}
