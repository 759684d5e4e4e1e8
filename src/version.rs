//! Version and build metadata.
//!
//! Build date, commit and branch come from `TAKEOFF_BUILD_DATE`,
//! `TAKEOFF_GIT_COMMIT` and `TAKEOFF_GIT_BRANCH` at compile time and read
//! `unknown` when unset.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current version of takeoff.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder for metadata that was not provided at build time.
pub const UNKNOWN: &str = "unknown";

/// Compile-time build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMeta {
    pub version: &'static str,
    pub pre_release: &'static str,
    pub build_date: &'static str,
    pub git_commit: &'static str,
    pub git_branch: &'static str,
}

impl BuildMeta {
    /// Metadata baked into this binary.
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            pre_release: env!("CARGO_PKG_VERSION_PRE"),
            build_date: or_unknown(option_env!("TAKEOFF_BUILD_DATE")),
            git_commit: or_unknown(option_env!("TAKEOFF_GIT_COMMIT")),
            git_branch: or_unknown(option_env!("TAKEOFF_GIT_BRANCH")),
        }
    }

    /// Version with commit and build date when known, e.g.
    /// `1.0.1 (commit: 3f2a9c1) built on 2024-05-01T10:00:00Z`.
    pub fn full_version(&self) -> String {
        let mut v = self.version.to_string();
        if self.git_commit != UNKNOWN {
            let short: String = self.git_commit.chars().take(7).collect();
            v.push_str(&format!(" (commit: {})", short));
        }
        if self.build_date != UNKNOWN {
            v.push_str(&format!(" built on {}", self.build_date));
        }
        v
    }

    /// Serializable summary.
    pub fn build_info(&self) -> BuildInfo {
        BuildInfo {
            version: self.version.to_string(),
            build_date: self.build_date.to_string(),
            git_commit: self.git_commit.to_string(),
            git_branch: self.git_branch.to_string(),
        }
    }

    /// Build date parsed as RFC 3339.
    pub fn build_date(&self) -> Result<DateTime<Utc>> {
        if self.build_date == UNKNOWN {
            bail!("build date unknown");
        }
        let parsed = DateTime::parse_from_rfc3339(self.build_date)
            .with_context(|| format!("invalid build date '{}'", self.build_date))?;
        Ok(parsed.with_timezone(&Utc))
    }

    /// Whether this build carries a pre-release suffix.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Compare this version with `other` component by component.
    pub fn compare(&self, other: &str) -> Ordering {
        compare_versions(self.version, other)
    }
}

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => UNKNOWN,
    }
}

/// Build information as reported by `takeoff version --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: String,
    pub build_date: String,
    pub git_commit: String,
    pub git_branch: String,
}

/// Numeric comparison of `major.minor.patch` strings.
///
/// Pre-release suffixes are ignored; missing components count as zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u32> {
        v.split(['-', '+'])
            .next()
            .unwrap_or_default()
            .split('.')
            .take(3)
            .map(|s| s.parse().unwrap_or(0))
            .collect()
    };

    let (a, b) = (parse(a), parse(b));
    (0..3)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(commit: &'static str, date: &'static str) -> BuildMeta {
        BuildMeta {
            version: "1.0.1",
            pre_release: "",
            build_date: date,
            git_commit: commit,
            git_branch: "main",
        }
    }

    #[test]
    fn full_version_without_metadata() {
        assert_eq!(meta(UNKNOWN, UNKNOWN).full_version(), "1.0.1");
    }

    #[test]
    fn full_version_truncates_commit() {
        let m = meta("3f2a9c1d8e7b", "2024-05-01T10:00:00Z");
        assert_eq!(
            m.full_version(),
            "1.0.1 (commit: 3f2a9c1) built on 2024-05-01T10:00:00Z"
        );
    }

    #[test]
    fn build_date_parses_rfc3339() {
        let m = meta(UNKNOWN, "2024-05-01T10:00:00+02:00");
        let date = m.build_date().unwrap();
        assert_eq!(date.to_rfc3339(), "2024-05-01T08:00:00+00:00");
    }

    #[test]
    fn build_date_unknown_is_error() {
        assert!(meta(UNKNOWN, UNKNOWN).build_date().is_err());
        assert!(meta(UNKNOWN, "yesterday").build_date().is_err());
    }

    #[test]
    fn prerelease_flag() {
        assert!(!meta(UNKNOWN, UNKNOWN).is_prerelease());
        let beta = BuildMeta {
            pre_release: "beta",
            ..meta(UNKNOWN, UNKNOWN)
        };
        assert!(beta.is_prerelease());
    }

    #[test]
    fn compare_is_numeric() {
        let m = meta(UNKNOWN, UNKNOWN);
        assert_eq!(m.compare("1.0.1"), Ordering::Equal);
        assert_eq!(m.compare("1.0.10"), Ordering::Less);
        assert_eq!(m.compare("0.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("2.0.0-rc.1", "2.0.0"), Ordering::Equal);
    }

    #[test]
    fn build_info_serializes() {
        let info = meta("abc", UNKNOWN).build_info();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["version"], "1.0.1");
        assert_eq!(json["git_commit"], "abc");
        assert_eq!(json["build_date"], UNKNOWN);
    }

    #[test]
    fn current_uses_package_version() {
        assert_eq!(BuildMeta::current().version, VERSION);
    }
}
