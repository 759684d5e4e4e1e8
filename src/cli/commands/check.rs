//! Check command implementation.
//!
//! The `takeoff check` command probes for Git, Java, the Android SDK and
//! Flutter and reports what is missing.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{Result, TakeoffError};
use crate::installer::InstallConfig;
use crate::platform::{install_guides, Os, PlatformInfo};
use crate::requirements::{Dependency, DependencyReport};
use crate::ui::{StatusKind, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    ctx: &'a AppContext<'a>,
    args: CheckArgs,
}

#[derive(Serialize)]
struct CheckOutput<'r> {
    platform: &'r PlatformInfo,
    all_required_installed: bool,
    dependencies: &'r [Dependency],
    paths: &'r InstallConfig,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(ctx: &'a AppContext<'a>, args: CheckArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut paths = InstallConfig::default();

        if self.args.json {
            let report = self.ctx.checker().check_all(&mut paths);
            let output = CheckOutput {
                platform: &self.ctx.platform,
                all_required_installed: report.all_required_installed(),
                dependencies: &report.dependencies,
                paths: &paths,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| TakeoffError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Checking Dependencies");

        let mut spinner = ui.start_spinner("Probing installed tools...");
        let report = self.ctx.checker().check_all(&mut paths);
        spinner.finish_success("Probe complete");

        show_report(ui, &report, self.ctx.platform.os);
        if ui.output_mode().shows_details() {
            show_locations(ui, &paths);
        }
        Ok(CommandResult::success())
    }
}

/// Print one status line per dependency, then the overall verdict.
pub fn show_report(ui: &mut dyn UserInterface, report: &DependencyReport, os: Os) {
    ui.message("Required Dependencies:");
    ui.message("");

    for dep in &report.dependencies {
        let kind = if dep.installed {
            StatusKind::Success
        } else {
            StatusKind::Error
        };
        ui.show_status(kind, &format!("{}: {}", dep.name, dep.status_text()));
        if dep.is_blocking() {
            ui.show_hint(&format!("→ {}", dep.description));
        }
    }
    ui.message("");

    if report.all_required_installed() {
        ui.success("All required dependencies are installed!");
        return;
    }

    ui.warning("Some dependencies are missing");
    ui.message("");
    ui.message("Installation Guide:");
    for (name, link) in install_guides(os) {
        ui.show_hint(&format!("• {}: {}", name, link));
    }
}

fn show_locations(ui: &mut dyn UserInterface, paths: &InstallConfig) {
    let found = [
        ("Git", &paths.git_path),
        ("Java", &paths.java_path),
        ("Android SDK", &paths.android_sdk_path),
        ("Flutter SDK", &paths.flutter_path),
    ];
    ui.message("");
    ui.message("Locations:");
    let mut any = false;
    for (name, path) in found {
        if let Some(path) = path {
            ui.show_status(StatusKind::Other, &format!("{}: {}", name, path.display()));
            any = true;
        }
    }
    if !any {
        ui.show_status(StatusKind::Info, "No tool locations were found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing;
    use crate::ui::{MockUI, OutputMode};

    #[test]
    fn all_installed_reports_success() {
        let ctx = testing::all_installed();
        let cmd = CheckCommand::new(&ctx, CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_status(StatusKind::Success, "Git: Installed (git version 2.43.0)"));
        assert!(ui.has_status(
            StatusKind::Success,
            "Flutter SDK: Installed (Flutter 3.24.0 • channel stable)"
        ));
        assert!(ui.has_success("All required dependencies are installed!"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn missing_required_lists_descriptions_and_guides() {
        let ctx = testing::bare_host();
        let cmd = CheckCommand::new(&ctx, CheckArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_status(StatusKind::Error, "Git: Not installed"));
        assert!(ui.has_hint("→ Version control system (required for Flutter)"));
        assert!(ui.has_warning("Some dependencies are missing"));
        assert!(ui.has_message("Installation Guide:"));
        assert!(ui.has_hint("• Git: https://git-scm.com/download/linux"));
    }

    #[test]
    fn optional_flutter_has_no_description_hint() {
        let ctx = testing::without_flutter();
        let cmd = CheckCommand::new(&ctx, CheckArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_status(StatusKind::Error, "Flutter SDK: Not installed"));
        assert!(!ui.hints().iter().any(|h| h.contains("Flutter development framework")));
        assert!(ui.has_success("All required dependencies are installed!"));
    }

    #[test]
    fn probe_uses_spinner() {
        let ctx = testing::all_installed();
        let cmd = CheckCommand::new(&ctx, CheckArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.spinners(), ["Probing installed tools..."]);
    }

    #[test]
    fn verbose_lists_tool_locations() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        CheckCommand::new(&ctx, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Locations:"));
        assert!(ui.has_status(StatusKind::Other, "Android SDK: /sdk/android"));
        assert!(ui.has_status(StatusKind::Other, "Flutter SDK: /opt/flutter"));
    }

    #[test]
    fn normal_mode_omits_locations() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();

        CheckCommand::new(&ctx, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!ui.has_message("Locations:"));
    }

    #[test]
    fn verbose_bare_host_has_no_locations() {
        let ctx = testing::bare_host();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        CheckCommand::new(&ctx, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_status(StatusKind::Info, "No tool locations were found"));
    }
}
