//! Fetching package metadata from the external query tool
//!
//! The query tool is any executable that prints a JSON array of package
//! records on stdout, `brew info --json=v1 --all` being the expected one.
//! The command is abstracted behind [`QueryRunner`] so tests can substitute
//! fixed output without a package manager installed.

use std::process::Command;

use crate::error::{Error, Result};
use crate::info::PackageInfo;
use crate::store::MetadataStore;

/// Capability to run the external query command and capture its stdout.
pub trait QueryRunner {
    fn run(&self) -> Result<Vec<u8>>;
}

/// Runs a configurable query command as a subprocess.
///
/// Blocks until the command completes; no timeout is applied, so a hung
/// command blocks the whole operation.
#[derive(Debug, Clone)]
pub struct BrewQuery {
    command: String,
    args: Vec<String>,
}

impl BrewQuery {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl Default for BrewQuery {
    fn default() -> Self {
        Self::new(
            "brew",
            vec!["info".into(), "--json=v1".into(), "--all".into()],
        )
    }
}

impl QueryRunner for BrewQuery {
    fn run(&self) -> Result<Vec<u8>> {
        tracing::debug!(command = %self.command, args = ?self.args, "running query command");
        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|e| Error::Fetch {
                message: format!("could not run '{}': {}", self.command, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Fetch {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(output.stdout)
    }
}

/// Outcome of a successful refresh.
#[derive(Debug)]
pub struct Refreshed {
    /// Number of records written to the cache
    pub records: usize,
    /// The raw query output, suitable for saving as a snapshot
    pub raw: Vec<u8>,
}

/// Refresh the cache from the query command.
///
/// Runs the command, decodes its output as a JSON array of records, and
/// writes each record keyed by full name in its own transaction. A failure
/// partway through leaves earlier keys updated and later keys stale; the
/// next successful refresh converges the cache again.
pub fn refresh<S, R>(store: &S, runner: &R) -> Result<Refreshed>
where
    S: MetadataStore,
    R: QueryRunner,
{
    let raw = runner.run()?;
    let records: Vec<PackageInfo> =
        serde_json::from_slice(&raw).map_err(|e| Error::Fetch {
            message: format!("query output is not a JSON array of package records: {e}"),
        })?;

    store.ensure_bucket()?;
    for info in &records {
        store.put(info)?;
    }

    tracing::debug!(records = records.len(), "cache refreshed");
    Ok(Refreshed {
        records: records.len(),
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    struct StubRunner(&'static str);

    impl QueryRunner for StubRunner {
        fn run(&self) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct FailingRunner;

    impl QueryRunner for FailingRunner {
        fn run(&self) -> Result<Vec<u8>> {
            Err(Error::Fetch {
                message: "'brew' exited with exit status: 1: no formulae".into(),
            })
        }
    }

    #[test]
    fn refresh_writes_every_record() {
        let store = MemoryStore::new();
        let runner = StubRunner(
            r#"[{"name": "a2ps", "full_name": "a2ps"}, {"name": "vim", "full_name": "vim"}]"#,
        );

        let outcome = refresh(&store, &runner).unwrap();
        assert_eq!(outcome.records, 2);
        assert_eq!(store.get("a2ps").unwrap().name, "a2ps");
        assert_eq!(store.get("vim").unwrap().name, "vim");
    }

    #[test]
    fn refresh_keeps_raw_output() {
        let store = MemoryStore::new();
        let runner = StubRunner(r#"[{"full_name": "a2ps"}]"#);

        let outcome = refresh(&store, &runner).unwrap();
        assert_eq!(outcome.raw, runner.0.as_bytes());
    }

    #[test]
    fn refresh_rejects_malformed_output() {
        let store = MemoryStore::new();
        let runner = StubRunner("brew has exploded");

        let err = refresh(&store, &runner).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn refresh_propagates_command_failure() {
        let store = MemoryStore::new();
        let err = refresh(&store, &FailingRunner).unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[test]
    fn brew_query_reports_missing_command() {
        let runner = BrewQuery::new("cellar-test-no-such-command", vec![]);
        let err = runner.run().unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[test]
    fn brew_query_reports_nonzero_exit() {
        let runner = BrewQuery::new("false", vec![]);
        let err = runner.run().unwrap_err();
        match err {
            Error::Fetch { message } => assert!(message.contains("exited")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}
