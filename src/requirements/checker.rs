//! Prerequisite checks for a Flutter installation.
//!
//! Runs, in order: Git, Java JDK, Android SDK and Flutter SDK. Tool
//! locations discovered along the way are written into the
//! [`InstallConfig`].

use std::path::{Path, PathBuf};

use crate::installer::InstallConfig;
use crate::platform::{default_android_sdk_paths, Os};

use super::probe::{adb_binary, ProbeContext};
use super::status::{Dependency, DependencyReport};

/// Display name of the Flutter dependency.
pub const FLUTTER_SDK: &str = "Flutter SDK";

/// Checks whether prerequisites are installed.
pub struct DependencyChecker<'a> {
    ctx: &'a ProbeContext<'a>,
    os: Os,
}

impl<'a> DependencyChecker<'a> {
    /// Create a checker probing through `ctx` for the given OS.
    pub fn new(ctx: &'a ProbeContext<'a>, os: Os) -> Self {
        Self { ctx, os }
    }

    /// Run every check and record discovered paths into `config`.
    pub fn check_all(&self, config: &mut InstallConfig) -> DependencyReport {
        DependencyReport::new(vec![
            self.check_git(config),
            self.check_java(config),
            self.check_android_sdk(config),
            self.check_flutter(config),
        ])
    }

    /// Git, via `git --version`.
    pub fn check_git(&self, config: &mut InstallConfig) -> Dependency {
        let mut dep = Dependency::missing(
            "Git",
            "Version control system (required for Flutter)",
            true,
        );

        if let Some(output) = self.run_ok("git", &["--version"]) {
            dep = dep.found(output.output.trim());
        }
        if let Some(path) = (self.ctx.which)("git") {
            config.git_path = Some(path);
        }

        tracing::debug!("Git: {}", dep.status_text());
        dep
    }

    /// Java, via `java -version`, plus `JAVA_HOME`.
    pub fn check_java(&self, config: &mut InstallConfig) -> Dependency {
        let mut dep = Dependency::missing(
            "Java JDK",
            "Java Development Kit 17+ (required for Android development)",
            true,
        );

        // `java -version` writes to stderr; the first line names the release
        if let Some(output) = self.run_ok("java", &["-version"]) {
            dep = dep.found(output.first_line().unwrap_or_default());
        }
        if let Some(home) = (self.ctx.env)("JAVA_HOME") {
            config.java_path = Some(PathBuf::from(home));
        }

        tracing::debug!("Java JDK: {}", dep.status_text());
        dep
    }

    /// Android SDK, found through `ANDROID_HOME`, `ANDROID_SDK_ROOT` or the
    /// OS default location. A root counts once it has `platform-tools`.
    pub fn check_android_sdk(&self, config: &mut InstallConfig) -> Dependency {
        let mut dep = Dependency::missing(
            "Android SDK",
            "Android command-line tools (required for Android development)",
            true,
        );

        let Some(root) = self.find_android_root() else {
            tracing::debug!("Android SDK: not found");
            return dep;
        };

        let adb = root.join("platform-tools").join(adb_binary());
        let version = self
            .run_ok(&adb.to_string_lossy(), &["version"])
            .and_then(|output| output.first_line().map(str::to_string))
            .unwrap_or_default();
        dep = dep.found(version);
        tracing::debug!("Android SDK at {}", root.display());
        config.android_sdk_path = Some(root);
        dep
    }

    /// Flutter, via `flutter --version`. Optional.
    pub fn check_flutter(&self, config: &mut InstallConfig) -> Dependency {
        let mut dep = Dependency::missing(FLUTTER_SDK, "Flutter development framework", false);

        if let Some(output) = self.run_ok("flutter", &["--version"]) {
            dep = dep.found(output.first_line().unwrap_or_default());
        }
        // <sdk>/bin/flutter -> <sdk>
        if let Some(sdk) = (self.ctx.which)("flutter")
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::parent)
        {
            config.flutter_path = Some(sdk.to_path_buf());
        }

        tracing::debug!("Flutter SDK: {}", dep.status_text());
        dep
    }

    fn find_android_root(&self) -> Option<PathBuf> {
        let from_env = ["ANDROID_HOME", "ANDROID_SDK_ROOT"]
            .iter()
            .filter_map(|key| (self.ctx.env)(key))
            .map(PathBuf::from);

        from_env
            .chain(default_android_sdk_paths(self.os))
            .find(|root| (self.ctx.exists)(&root.join("platform-tools")))
    }

    fn run_ok(&self, program: &str, args: &[&str]) -> Option<crate::shell::CommandOutput> {
        (self.ctx.run)(program, args).filter(|output| output.success)
    }
}
