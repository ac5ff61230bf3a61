//! Environment overlay and argument construction for the test runner.
//!
//! Pure functions only. The overlay is built from explicit options and merged
//! onto a snapshot of the inherited environment that the caller supplies.

use std::collections::BTreeMap;

/// Variable carrying the platform endpoint into the test suite.
pub const BASE_ENDPOINT_VAR: &str = "ZAPIER_BASE_ENDPOINT";
/// Variable carrying the stored deploy key into the test suite.
pub const DEPLOY_KEY_VAR: &str = "ZAPIER_DEPLOY_KEY";
/// Debug flags understood by `zapier-platform-core`; always set as a pair.
pub const DEBUG_VARS: [&str; 2] = ["LOG_TO_STDOUT", "DETAILED_LOG_TO_STDOUT"];

/// Launcher used to run the app's test script.
pub const TEST_PROGRAM: &str = "npm";
/// Base arguments passed to [`TEST_PROGRAM`].
pub const TEST_ARGS: [&str; 3] = ["run", "--silent", "test"];

/// Variables layered over the inherited environment of the test process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentOverlay {
    vars: BTreeMap<String, String>,
}

impl EnvironmentOverlay {
    /// Base overlay: the endpoint, plus both debug flags when `debug` is set.
    #[must_use]
    pub fn new(base_endpoint: &str, debug: bool) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(BASE_ENDPOINT_VAR.to_string(), base_endpoint.to_string());
        if debug {
            for name in DEBUG_VARS {
                vars.insert(name.to_string(), "true".to_string());
            }
        }
        Self { vars }
    }

    pub fn set_deploy_key(&mut self, key: &str) {
        self.vars.insert(DEPLOY_KEY_VAR.to_string(), key.to_string());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Copy `inherited` and lay `overlay` on top; overlay values win on collision.
pub fn merge_env<I, K, V>(inherited: I, overlay: &EnvironmentOverlay) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut env: BTreeMap<String, String> = inherited
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    for (name, value) in overlay.iter() {
        env.insert(name.to_string(), value.to_string());
    }
    env
}

/// Arguments for `npm`: `run --silent test`, then `-- --timeout=<value>` when
/// a non-empty timeout is given. The value is forwarded verbatim.
#[must_use]
pub fn test_command_args(timeout: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = TEST_ARGS.iter().map(|a| (*a).to_string()).collect();
    if let Some(value) = timeout.filter(|t| !t.is_empty()) {
        args.push("--".to_string());
        args.push(format!("--timeout={value}"));
    }
    args
}
