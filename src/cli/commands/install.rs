//! Install command implementation.
//!
//! The `takeoff install` command walks through:
//! 1. a reinstall confirmation when Flutter is already on PATH,
//! 2. choosing the install directory (default, browse or type),
//! 3. the planned task list and a final confirmation,
//! 4. the install steps with progress, then next steps.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::config::expand_home;
use crate::error::Result;
use crate::installer::{run_install, InstallConfig, Installer, SimulatedInstaller, PLANNED_TASKS};
use crate::ui::{DirectoryBrowser, Entry, Menu, Outcome, Prompt, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

const CHOICE_DEFAULT: &str = "default";
const CHOICE_BROWSE: &str = "browse";
const CHOICE_TYPE: &str = "type";

/// Shown after a successful install.
pub const NEXT_STEPS: [&str; 3] = [
    "1. Restart your terminal/command prompt",
    "2. Run 'flutter doctor' to verify installation",
    "3. Accept Android licenses with 'flutter doctor --android-licenses'",
];

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: &'a AppContext<'a>,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a AppContext<'a>, args: InstallArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InstallArgs {
        &self.args
    }

    /// Run the flow against a specific installer.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn Installer,
    ) -> Result<CommandResult> {
        ui.show_header("Flutter SDK Installation");

        let mut paths = InstallConfig::default();
        let flutter = self.ctx.checker().check_flutter(&mut paths);
        if flutter.installed {
            ui.warning("Flutter is already installed!");
            ui.show_hint(&format!("Version: {}", flutter.version));
            if let Some(sdk) = &paths.flutter_path {
                ui.show_hint(&format!("Location: {}", sdk.display()));
            }
            if !self.confirm(ui, "reinstall", "Do you want to reinstall?")? {
                return Ok(cancelled(ui));
            }
        }

        let Some(dest) = self.choose_path(ui)? else {
            return Ok(cancelled(ui));
        };
        paths.flutter_path = Some(dest.clone());
        ui.success(&format!("Installation path set to: {}", dest.display()));

        ui.message("");
        ui.message("Installation Steps:");
        for task in PLANNED_TASKS {
            ui.show_checkbox(true, task);
        }
        ui.message("");
        if !self.confirm(ui, "continue_install", "Continue with installation?")? {
            return Ok(cancelled(ui));
        }

        ui.show_header("Installing Flutter SDK");
        let mut progress = ui.start_progress();
        let path_entry = run_install(installer, &dest, progress.as_mut())?;
        tracing::debug!("install finished: {:?}", paths);

        ui.success("Flutter SDK installation complete!");
        ui.show_hint(&format!("PATH entry: {}", path_entry.display()));
        ui.message("");
        ui.warning("Important Next Steps:");
        for step in NEXT_STEPS {
            ui.message(step);
        }
        Ok(CommandResult::success())
    }

    fn confirm(&self, ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
        if self.args.yes {
            return Ok(true);
        }
        Ok(ui.prompt(&Prompt::confirm(key, question, false))?.as_bool())
    }

    /// Resolve the install directory. `None` means the user backed out.
    fn choose_path(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        let default = self.ctx.config.install_path();

        if let Some(path) = &self.args.path {
            return Ok(Some(expand_home(path)));
        }
        if !ui.is_interactive() {
            return Ok(Some(default));
        }

        let mut browse_first = self.args.browse;
        loop {
            let choice = if browse_first {
                browse_first = false;
                CHOICE_BROWSE.to_string()
            } else {
                match ui.select(self.path_menu(&default))? {
                    Outcome::Committed(choice) => choice,
                    Outcome::Cancelled => return Ok(None),
                }
            };

            match choice.as_str() {
                CHOICE_BROWSE => {
                    let browser =
                        DirectoryBrowser::new(&browse_start(&default), self.ctx.config.picker_height)
                            .with_hidden(self.ctx.config.show_hidden);
                    match ui.pick_directory(browser)? {
                        Outcome::Committed(path) => return Ok(Some(path)),
                        Outcome::Cancelled => {
                            ui.show_hint("No directory selected; the default is kept")
                        }
                    }
                }
                CHOICE_TYPE => {
                    let shown = default.display().to_string();
                    let answer = ui
                        .prompt(&Prompt::input(
                            "install_path",
                            "Installation path",
                            Some(&shown),
                        ))?
                        .as_string();
                    let answer = answer.trim();
                    if answer.is_empty() {
                        return Ok(Some(default));
                    }
                    return Ok(Some(expand_home(Path::new(answer))));
                }
                _ => return Ok(Some(default)),
            }
        }
    }

    fn path_menu(&self, default: &Path) -> Menu<String> {
        let entries = vec![
            Entry::new("Use default", CHOICE_DEFAULT.to_string())
                .with_description(default.display().to_string()),
            Entry::new("Browse...", CHOICE_BROWSE.to_string())
                .with_description("Pick a directory with the file browser"),
            Entry::new("Type a path", CHOICE_TYPE.to_string())
                .with_description("Enter a custom installation path"),
        ];
        Menu::new("Flutter installation path:", entries, self.ctx.config.menu_height)
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &mut SimulatedInstaller::new())
    }
}

fn cancelled(ui: &mut dyn UserInterface) -> CommandResult {
    ui.message("Installation cancelled.");
    CommandResult::success()
}

/// Closest existing directory above `default`, so the browser opens next to
/// where the SDK would go.
fn browse_start(default: &Path) -> PathBuf {
    default
        .ancestors()
        .skip(1)
        .find(|dir| dir.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
