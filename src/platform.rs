//! Host platform detection.
//!
//! Maps the compile-time target (`std::env::consts`) to display names, the
//! level of installer support, and the Flutter targets that can be built on
//! this host.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Os {
    /// Parse from a `std::env::consts::OS` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "windows" => Os::Windows,
            "macos" => Os::MacOs,
            "linux" => Os::Linux,
            _ => Os::Other,
        }
    }

    /// The OS this binary runs on.
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Icon shown next to the OS name.
    pub fn icon(&self) -> &'static str {
        match self {
            Os::Windows => "🪟",
            Os::MacOs => "🍎",
            Os::Linux => "🐧",
            Os::Other => "💻",
        }
    }

    /// How well the installer supports this OS.
    pub fn support(&self) -> SupportLevel {
        match self {
            Os::Windows => SupportLevel::Full,
            Os::MacOs | Os::Linux => SupportLevel::Experimental,
            Os::Other => SupportLevel::Unsupported,
        }
    }

    /// Flutter targets that can be developed for on this OS.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            Os::Windows => &["Android", "Web", "Windows Desktop"],
            Os::MacOs => &["iOS", "Android", "Web", "macOS Desktop"],
            Os::Linux => &["Android", "Web", "Linux Desktop"],
            Os::Other => &["Web"],
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Windows => write!(f, "Windows"),
            Os::MacOs => write!(f, "macOS"),
            Os::Linux => write!(f, "Linux"),
            Os::Other => write!(f, "{}", std::env::consts::OS),
        }
    }
}

/// Installer support status for a host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Full,
    Experimental,
    Unsupported,
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportLevel::Full => write!(f, "Fully Supported"),
            SupportLevel::Experimental => write!(f, "Experimental"),
            SupportLevel::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// Friendly name for a `std::env::consts::ARCH` value.
pub fn arch_display(arch: &str) -> &str {
    match arch {
        "x86_64" => "64-bit",
        "x86" => "32-bit",
        "aarch64" => "ARM64",
        "arm" => "ARM",
        other => other,
    }
}

/// Snapshot of the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub os: Os,
    pub arch: String,
}

impl PlatformInfo {
    /// Detect the host platform.
    pub fn detect() -> Self {
        Self {
            os: Os::current(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Targets joined as `Android + Web + Linux Desktop`.
    pub fn targets_line(&self) -> String {
        self.os.targets().join(" + ")
    }

    /// One-line summary without the support status.
    pub fn summary(&self) -> String {
        format!(
            "Platform: {} \u{00A0} {} {}",
            self.os.icon(),
            self.os,
            arch_display(&self.arch)
        )
    }
}

/// Default Flutter SDK location: `<home>/flutter`.
pub fn default_flutter_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join("flutter")
}

/// Usual Android SDK locations for this OS, most likely first.
pub fn default_android_sdk_paths(os: Os) -> Vec<PathBuf> {
    let home = dirs::home_dir().unwrap_or_default();
    match os {
        Os::Windows => {
            let mut paths = Vec::new();
            if let Some(local) = dirs::data_local_dir() {
                paths.push(local.join("Android").join("Sdk"));
            }
            paths.push(home.join("AppData").join("Local").join("Android").join("Sdk"));
            paths
        }
        Os::MacOs => vec![home.join("Library").join("Android").join("sdk")],
        Os::Linux | Os::Other => vec![home.join("Android").join("Sdk")],
    }
}

/// Where Android tooling usually installs for the current OS.
pub fn default_android_sdk_path() -> PathBuf {
    default_android_sdk_paths(Os::current())
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Install guide links shown when required dependencies are missing.
pub fn install_guides(os: Os) -> Vec<(&'static str, &'static str)> {
    let git = match os {
        Os::Windows => "https://git-scm.com/download/win",
        Os::MacOs => "https://git-scm.com/download/mac",
        Os::Linux | Os::Other => "https://git-scm.com/download/linux",
    };
    vec![
        ("Git", git),
        ("Java JDK", "https://adoptium.net/"),
        (
            "Android SDK",
            "Install Android Studio or use command-line tools",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_from_name() {
        assert_eq!(Os::from_name("windows"), Os::Windows);
        assert_eq!(Os::from_name("macos"), Os::MacOs);
        assert_eq!(Os::from_name("linux"), Os::Linux);
        assert_eq!(Os::from_name("freebsd"), Os::Other);
    }

    #[test]
    fn support_levels() {
        assert_eq!(Os::Windows.support(), SupportLevel::Full);
        assert_eq!(Os::MacOs.support(), SupportLevel::Experimental);
        assert_eq!(Os::Linux.support(), SupportLevel::Experimental);
        assert_eq!(Os::Other.support(), SupportLevel::Unsupported);
        assert_eq!(SupportLevel::Full.to_string(), "Fully Supported");
    }

    #[test]
    fn targets_per_os() {
        assert_eq!(Os::Windows.targets(), &["Android", "Web", "Windows Desktop"]);
        assert_eq!(Os::MacOs.targets()[0], "iOS");
        assert_eq!(Os::Other.targets(), &["Web"]);
    }

    #[test]
    fn arch_names() {
        assert_eq!(arch_display("x86_64"), "64-bit");
        assert_eq!(arch_display("x86"), "32-bit");
        assert_eq!(arch_display("aarch64"), "ARM64");
        assert_eq!(arch_display("arm"), "ARM");
        assert_eq!(arch_display("riscv64"), "riscv64");
    }

    #[test]
    fn summary_line() {
        let info = PlatformInfo {
            os: Os::Linux,
            arch: "x86_64".to_string(),
        };
        assert_eq!(info.summary(), "Platform: 🐧 \u{00A0} Linux 64-bit");
        assert_eq!(info.targets_line(), "Android + Web + Linux Desktop");
    }

    #[test]
    fn default_flutter_path_ends_with_flutter() {
        assert!(default_flutter_path().ends_with("flutter"));
    }

    #[test]
    fn android_defaults_per_os() {
        assert!(default_android_sdk_paths(Os::MacOs)[0].ends_with("Library/Android/sdk"));
        assert!(default_android_sdk_paths(Os::Linux)[0].ends_with("Android/Sdk"));
        assert!(!default_android_sdk_paths(Os::Windows).is_empty());
    }

    #[test]
    fn guides_name_each_required_tool() {
        let guides = install_guides(Os::Windows);
        let names: Vec<_> = guides.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Git", "Java JDK", "Android SDK"]);
        assert_eq!(guides[0].1, "https://git-scm.com/download/win");
    }
}
