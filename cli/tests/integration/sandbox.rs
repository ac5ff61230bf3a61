//! Throwaway app directory, credential file, and fake `node` / `npm`
//! executables for driving the real binary end to end.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const VALID_PACKAGE: &str = r#"{
  "name": "example-app",
  "version": "1.0.0",
  "main": "index.js",
  "scripts": {"test": "mocha --recursive"},
  "dependencies": {"zapier-platform-core": "15.0.0"}
}"#;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// Valid app, stored key `abc`, `node` v20, and an `npm` that records
    /// its arguments and environment.
    pub fn new() -> Self {
        let sandbox = Self {
            dir: TempDir::new().expect("temp dir"),
        };
        std::fs::create_dir_all(sandbox.app_dir()).expect("app dir");
        std::fs::create_dir_all(sandbox.bin_dir()).expect("bin dir");
        std::fs::create_dir_all(sandbox.record_dir()).expect("record dir");
        sandbox.write_app(VALID_PACKAGE);
        std::fs::write(sandbox.app_dir().join("index.js"), "module.exports = {};\n")
            .expect("index.js");
        std::fs::write(sandbox.auth_file(), r#"{"deployKey":"abc"}"#).expect("zapierrc");
        sandbox.fake_node("v20.11.1");
        sandbox.fake_npm(0);
        sandbox
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root().join("app")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root().join("bin")
    }

    pub fn record_dir(&self) -> PathBuf {
        self.root().join("record")
    }

    pub fn auth_file(&self) -> PathBuf {
        self.root().join(".zapierrc")
    }

    pub fn write_app(&self, package_json: &str) {
        std::fs::write(self.app_dir().join("package.json"), package_json).expect("package.json");
    }

    pub fn fake_node(&self, version: &str) {
        self.script("node", &format!("#!/bin/sh\necho {version}\n"));
    }

    pub fn fake_npm(&self, exit_code: i32) {
        self.script(
            "npm",
            &format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$ZAPIER_TEST_RECORD/args\"\nenv > \"$ZAPIER_TEST_RECORD/env\"\nexit {exit_code}\n"
            ),
        );
    }

    fn script(&self, name: &str, body: &str) {
        let path = self.bin_dir().join(name);
        std::fs::write(&path, body).expect("write script");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("chmod");
        }
    }

    /// `zapier` running inside the app directory with an isolated
    /// configuration and a `PATH` that finds the fakes first.
    pub fn zapier(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zapier"));
        let path = format!("{}:/usr/bin:/bin", self.bin_dir().display());
        cmd.current_dir(self.app_dir())
            .env("NO_COLOR", "1")
            .env("PATH", path)
            .env("ZAPIER_CONFIG", self.root().join("config.yaml"))
            .env("ZAPIER_AUTH_LOCATION", self.auth_file())
            .env("ZAPIER_TEST_RECORD", self.record_dir())
            .env_remove("ZAPIER_BASE_ENDPOINT")
            .env_remove("ZAPIER_DEPLOY_KEY")
            .env_remove("LOG_TO_STDOUT")
            .env_remove("DETAILED_LOG_TO_STDOUT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Arguments `npm` was called with, or `None` if it never ran.
    pub fn npm_args(&self) -> Option<Vec<String>> {
        let content = std::fs::read_to_string(self.record_dir().join("args")).ok()?;
        Some(content.lines().map(String::from).collect())
    }

    /// Environment `npm` saw, as `NAME=value` lines.
    pub fn npm_env(&self) -> Vec<String> {
        std::fs::read_to_string(self.record_dir().join("env"))
            .expect("npm env recorded")
            .lines()
            .map(String::from)
            .collect()
    }
}
