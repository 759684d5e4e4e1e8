//! State shared by every command.

use crate::config::TakeoffConfig;
use crate::error::Result;
use crate::platform::PlatformInfo;
use crate::requirements::{default_context, DependencyChecker, ProbeContext};
use crate::shell::{run_checked, CommandOutput};
use crate::version::BuildMeta;

/// Loaded configuration plus the host access commands go through.
pub struct AppContext<'a> {
    pub config: TakeoffConfig,
    pub platform: PlatformInfo,
    /// Used by dependency checks.
    pub probe: ProbeContext<'a>,
    /// Runs a program and requires it to succeed (`flutter doctor`).
    pub exec: &'a dyn Fn(&str, &[&str]) -> Result<CommandOutput>,
    pub meta: BuildMeta,
}

impl AppContext<'static> {
    /// Context for the real host.
    pub fn new(config: TakeoffConfig) -> Self {
        Self {
            config,
            platform: PlatformInfo::detect(),
            probe: default_context(),
            exec: &run_checked,
            meta: BuildMeta::current(),
        }
    }
}

impl<'a> AppContext<'a> {
    /// Dependency checker bound to this context's probes.
    pub fn checker(&self) -> DependencyChecker<'_> {
        DependencyChecker::new(&self.probe, self.platform.os)
    }
}
