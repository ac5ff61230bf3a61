//! Shared mock infrastructure for unit tests.
//!
//! Each mock records how it was called so tests can assert both the result
//! of a use-case and which collaborators it touched.

#![allow(clippy::expect_used, dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use zapier_cli::application::ports::{
    AppValidator, CommandRunner, CredentialStore, ProgressReporter, RunOptions, StdioMode,
    VersionGate,
};
use zapier_cli::domain::{CredentialError, Credentials, VersionCheck};

// ── Version gate ──────────────────────────────────────────────────────────────

/// Returns a fixed answer and counts calls.
pub struct FixedGate {
    answer: VersionCheck,
    calls: Mutex<u32>,
}

impl FixedGate {
    pub fn compatible() -> Self {
        Self {
            answer: VersionCheck::Compatible,
            calls: Mutex::new(0),
        }
    }

    pub fn incompatible(found: &str, required: &str) -> Self {
        Self {
            answer: VersionCheck::Incompatible {
                found: found.to_string(),
                required: required.to_string(),
            },
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().expect("lock")
    }
}

impl VersionGate for FixedGate {
    fn check(&self) -> VersionCheck {
        *self.calls.lock().expect("lock") += 1;
        self.answer.clone()
    }
}

// ── Validator ─────────────────────────────────────────────────────────────────

/// Error type used to check that failures pass through untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct Boom(pub &'static str);

/// Succeeds, or fails with `Boom`, recording the directories it saw.
pub struct FakeValidator {
    failure: Option<&'static str>,
    seen: Mutex<Vec<PathBuf>>,
}

impl FakeValidator {
    pub fn ok() -> Self {
        Self {
            failure: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(msg: &'static str) -> Self {
        Self {
            failure: Some(msg),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().expect("lock").clone()
    }
}

impl AppValidator for FakeValidator {
    async fn validate(&self, app_dir: &Path) -> Result<()> {
        self.seen.lock().expect("lock").push(app_dir.to_path_buf());
        match self.failure {
            Some(msg) => Err(Boom(msg).into()),
            None => Ok(()),
        }
    }
}

// ── Credential store ──────────────────────────────────────────────────────────

/// In-memory credential store keyed by path.
pub struct MemoryCredentialStore {
    entries: Mutex<BTreeMap<PathBuf, Credentials>>,
    reads: Mutex<Vec<(PathBuf, bool)>>,
}

impl MemoryCredentialStore {
    pub fn empty() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_key(location: &str, key: &str) -> Self {
        let store = Self::empty();
        store
            .entries
            .lock()
            .expect("lock")
            .insert(PathBuf::from(location), Credentials::new(key));
        store
    }

    pub fn reads(&self) -> Vec<(PathBuf, bool)> {
        self.reads.lock().expect("lock").clone()
    }

    pub fn stored(&self, location: &str) -> Option<Credentials> {
        self.entries
            .lock()
            .expect("lock")
            .get(Path::new(location))
            .cloned()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn read(&self, location: &Path, prompt: bool) -> Result<Credentials> {
        self.reads
            .lock()
            .expect("lock")
            .push((location.to_path_buf(), prompt));
        self.entries
            .lock()
            .expect("lock")
            .get(location)
            .cloned()
            .ok_or_else(|| CredentialError::NotFound(location.display().to_string()).into())
    }

    async fn write(&self, location: &Path, credentials: &Credentials) -> Result<()> {
        self.entries
            .lock()
            .expect("lock")
            .insert(location.to_path_buf(), credentials.clone());
        Ok(())
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

/// One recorded `run_command` call.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub program: String,
    pub args: Vec<String>,
    pub stdio: StdioMode,
    pub env: BTreeMap<String, String>,
}

/// Records calls and replies with a canned result.
pub struct RecordingRunner {
    output: Option<String>,
    failure: Option<&'static str>,
    runs: Mutex<Vec<RecordedRun>>,
}

impl RecordingRunner {
    pub fn silent() -> Self {
        Self::with_output(None)
    }

    pub fn with_output(output: Option<&str>) -> Self {
        Self {
            output: output.map(str::to_string),
            failure: None,
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(msg: &'static str) -> Self {
        Self {
            output: None,
            failure: Some(msg),
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().expect("lock").clone()
    }

    pub fn only_run(&self) -> RecordedRun {
        let runs = self.runs();
        assert_eq!(runs.len(), 1, "expected exactly one run, got {runs:?}");
        runs.into_iter().next().expect("one run")
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_command(
        &self,
        program: &str,
        args: &[String],
        opts: &RunOptions<'_>,
    ) -> Result<Option<String>> {
        self.runs.lock().expect("lock").push(RecordedRun {
            program: program.to_string(),
            args: args.to_vec(),
            stdio: opts.stdio,
            env: opts.env.clone(),
        });
        match self.failure {
            Some(msg) => Err(Boom(msg).into()),
            None => Ok(self.output.clone()),
        }
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Collects every message, tagged with its kind.
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn line(&self, message: &str) {
        self.messages.lock().expect("lock").push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("ok: {message}"));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push(format!("warn: {message}"));
    }
}
