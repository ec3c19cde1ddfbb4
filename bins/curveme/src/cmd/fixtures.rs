//! `fixtures` subcommand: runs JSON fixture files.
use alloy_primitives::Bytes;
use clap::Parser;
use precompile::{execute, PrecompileId, Precompiles, ResultCode};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// A single fixture. A fixture file holds a JSON array of them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Fixture {
    /// Fixture name, reported on failure
    pub name: String,
    /// Operation name or `0x..` opcode
    pub op: String,
    /// Encoded input
    pub input: Bytes,
    /// Encoded output, implies a zero result code
    #[serde(default)]
    pub expected: Option<Bytes>,
    /// Expected result code
    #[serde(default)]
    pub expected_code: Option<u8>,
}

/// Error that occurs while running fixtures
#[derive(Debug, Error)]
#[error("Path: {path}\nName: {name}\nError: {kind}")]
pub struct FixtureError {
    /// Fixture name
    pub name: String,
    /// File the fixture comes from
    pub path: String,
    /// What went wrong
    pub kind: FixtureErrorKind,
}

/// Specific kind of fixture failure
#[derive(Debug, Error)]
pub enum FixtureErrorKind {
    /// `Op` is not a known operation.
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
    /// Neither `Expected` nor `ExpectedCode` is present.
    #[error("fixture has neither `Expected` nor `ExpectedCode`")]
    MissingExpectation,
    /// `Expected` is present with a non zero `ExpectedCode`.
    #[error("`Expected` output given with non zero code {0}")]
    ConflictingExpectation(u8),
    /// The call returned another code.
    #[error("unexpected result code: got {got}, expected {expected}")]
    UnexpectedCode {
        /// Returned code
        got: u8,
        /// Fixture code
        expected: u8,
    },
    /// The validator disagrees with the call.
    #[error("validator returned code {got}, call returned {expected}")]
    UnexpectedValidation {
        /// Validator code
        got: u8,
        /// Call code
        expected: u8,
    },
    /// The call succeeded with another output.
    #[error("unexpected output: got {got}, expected {expected}")]
    UnexpectedOutput {
        /// Returned output
        got: Bytes,
        /// Fixture output
        expected: Bytes,
    },
    /// Some fixtures failed while running with `--keep-going`.
    #[error("{failed} of {total} fixtures failed")]
    Failed {
        /// Failed fixtures
        failed: usize,
        /// Fixtures run
        total: usize,
    },
    /// Reading a fixture file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A fixture file is malformed.
    #[error(transparent)]
    SerdeDeserialize(#[from] serde_json::Error),
    /// Path does not exist.
    #[error("path does not exist")]
    InvalidPath,
    /// Directory holds no fixture files.
    #[error("no JSON fixture files found in path")]
    NoJsonFiles,
}

/// Outcome of a fixture run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Fixtures that matched
    pub passed: usize,
    /// Fixtures that did not match
    pub failed: usize,
}

/// `fixtures` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path to folder or file containing the fixtures
    ///
    /// Folders are searched recursively for files with the extension `.json`.
    #[arg(required = true, num_args = 1..)]
    paths: Vec<PathBuf>,
    /// Keep going after a fixture failure
    #[arg(long, alias = "no-fail-fast")]
    keep_going: bool,
}

impl Cmd {
    /// Runs `fixtures` command.
    pub fn run(&self) -> Result<Summary, FixtureError> {
        let mut summary = Summary::default();
        for path in &self.paths {
            let path_error = |kind| FixtureError {
                name: "Path validation".to_string(),
                path: path.display().to_string(),
                kind,
            };
            if !path.exists() {
                return Err(path_error(FixtureErrorKind::InvalidPath));
            }

            let files = find_all_json_fixtures(path);
            if files.is_empty() {
                return Err(path_error(FixtureErrorKind::NoJsonFiles));
            }

            println!("\nRunning fixtures in {}...", path.display());
            let result = run(&files, self.keep_going)?;
            summary.passed += result.passed;
            summary.failed += result.failed;
        }

        println!("Passed: {}, failed: {}", summary.passed, summary.failed);
        if summary.failed > 0 {
            return Err(FixtureError {
                name: "Summary".to_string(),
                path: String::new(),
                kind: FixtureErrorKind::Failed {
                    failed: summary.failed,
                    total: summary.passed + summary.failed,
                },
            });
        }
        Ok(summary)
    }
}

/// Find all JSON fixture files in the given path
/// If path is a file, returns it in a vector
/// If path is a directory, recursively finds all .json files
pub fn find_all_json_fixtures(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension() == Some("json".as_ref()))
            .map(DirEntry::into_path)
            .collect();
        files.sort();
        files
    }
}

/// Runs every fixture of every file. Stops on the first failure unless `keep_going` is set,
/// in which case failures are printed and counted.
pub fn run(files: &[PathBuf], keep_going: bool) -> Result<Summary, FixtureError> {
    let mut summary = Summary::default();
    for file in files {
        let path = file.display().to_string();
        let fixtures = load(file).map_err(|kind| FixtureError {
            name: "File".to_string(),
            path: path.clone(),
            kind,
        })?;
        info!(%path, count = fixtures.len(), "loaded fixtures");

        for fixture in &fixtures {
            match run_fixture(fixture) {
                Ok(()) => summary.passed += 1,
                Err(kind) => {
                    let err = FixtureError {
                        name: fixture.name.clone(),
                        path: path.clone(),
                        kind,
                    };
                    if !keep_going {
                        return Err(err);
                    }
                    eprintln!("{err}\n");
                    summary.failed += 1;
                }
            }
        }
    }
    Ok(summary)
}

/// Reads a fixture file.
pub fn load(path: &Path) -> Result<Vec<Fixture>, FixtureErrorKind> {
    let s = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

/// Runs one fixture through [`execute`] and the validator, and compares both with the
/// expectation.
pub fn run_fixture(fixture: &Fixture) -> Result<(), FixtureErrorKind> {
    let op: PrecompileId = fixture
        .op
        .parse()
        .map_err(|_| FixtureErrorKind::UnknownOperation(fixture.op.clone()))?;
    let expected_code = match (&fixture.expected, fixture.expected_code) {
        (None, None) => return Err(FixtureErrorKind::MissingExpectation),
        (Some(_), Some(code)) if code != ResultCode::Success.as_u8() => {
            return Err(FixtureErrorKind::ConflictingExpectation(code))
        }
        (_, code) => code.unwrap_or_default(),
    };

    let mut output = vec![0u8; op.output_len()];
    let code = execute(op, &fixture.input, &mut output).as_u8();
    debug!(name = %fixture.name, %op, code, "ran fixture");
    if code != expected_code {
        return Err(FixtureErrorKind::UnexpectedCode {
            got: code,
            expected: expected_code,
        });
    }

    // Validation shares the decode path, so it agrees with every code but a failed computation.
    if code != ResultCode::ComputationFailed.as_u8() {
        let validated = Precompiles::new()
            .get(op)
            .map_or(ResultCode::InvalidInput, |precompile| {
                precompile
                    .validate(&fixture.input)
                    .map_or_else(|err| err.result_code(), |()| ResultCode::Success)
            })
            .as_u8();
        if validated != code {
            return Err(FixtureErrorKind::UnexpectedValidation {
                got: validated,
                expected: code,
            });
        }
    }

    if let Some(expected) = &fixture.expected {
        if output[..] != expected[..] {
            return Err(FixtureErrorKind::UnexpectedOutput {
                got: output.into(),
                expected: expected.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Fixture {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn wrong_output_is_reported() {
        let fixture = parse(
            r#"{
                "Name": "bad",
                "Op": "BN254_PAIRING",
                "Input": "0x",
                "Expected": "0x0000000000000000000000000000000000000000000000000000000000000000"
            }"#,
        );
        assert!(matches!(
            run_fixture(&fixture),
            Err(FixtureErrorKind::UnexpectedOutput { .. })
        ));
    }

    #[test]
    fn wrong_code_is_reported() {
        let fixture = parse(r#"{"Name": "x", "Op": "0x0d", "Input": "0x", "ExpectedCode": 2}"#);
        assert!(matches!(
            run_fixture(&fixture),
            Err(FixtureErrorKind::UnexpectedCode {
                got: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn malformed_fixtures_are_reported() {
        let fixture = parse(r#"{"Name": "x", "Op": "ECRECOVER", "Input": "0x", "ExpectedCode": 1}"#);
        assert!(matches!(
            run_fixture(&fixture),
            Err(FixtureErrorKind::UnknownOperation(_))
        ));

        let fixture = parse(r#"{"Name": "x", "Op": "BN254_ADD", "Input": "0x"}"#);
        assert!(matches!(
            run_fixture(&fixture),
            Err(FixtureErrorKind::MissingExpectation)
        ));

        let unknown_field = r#"{"Name": "x", "Op": "BN254_ADD", "Input": "0x", "Gas": 1}"#;
        assert!(serde_json::from_str::<Fixture>(unknown_field).is_err());
    }
}
