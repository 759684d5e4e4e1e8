//! Interactive main menu.
//!
//! Shows the banner, then loops over the main menu until the user picks
//! "Exit" or cancels it. Each action pauses on "Press Enter to continue".

use crate::cli::args::{CheckArgs, InstallArgs, VersionArgs};
use crate::error::{Result, TakeoffError};
use crate::platform::SupportLevel;
use crate::ui::{Entry, Menu, Outcome, StatusKind, UserInterface};

use super::check::CheckCommand;
use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::doctor::DoctorCommand;
use super::install::InstallCommand;
use super::version::VersionCommand;

const BANNER: [&str; 7] = [
    "╔═══════════════════════════════════════════════════════╗",
    "║                                                       ║",
    "║              🚀 Flutter Takeoff 🚀                    ║",
    "║                                                       ║",
    "║        Simplify Your Flutter Development Setup        ║",
    "║                                                       ║",
    "╚═══════════════════════════════════════════════════════╝",
];

/// Main menu entries as `(label, description, value)`.
pub const MAIN_MENU: [(&str, &str, &str); 5] = [
    ("Check Dependencies", "Verify installed prerequisites", "check"),
    ("Install Flutter SDK", "Download and set up Flutter", "install"),
    ("Run Flutter Doctor", "Diagnose Flutter installation", "doctor"),
    ("Version Info", "Show version and build information", "version"),
    ("Exit", "Quit the installer", "quit"),
];

/// The menu command implementation.
pub struct MenuCommand<'a> {
    ctx: &'a AppContext<'a>,
}

impl<'a> MenuCommand<'a> {
    /// Create a new menu command.
    pub fn new(ctx: &'a AppContext<'a>) -> Self {
        Self { ctx }
    }

    fn show_banner(&self, ui: &mut dyn UserInterface) {
        for line in BANNER {
            ui.message(line);
        }
        ui.show_hint(&format!(
            "v{} | {}",
            self.ctx.meta.full_version(),
            self.ctx.platform.targets_line()
        ));

        let support = self.ctx.platform.os.support();
        let kind = match support {
            SupportLevel::Full => StatusKind::Success,
            SupportLevel::Experimental => StatusKind::Warning,
            SupportLevel::Unsupported => StatusKind::Error,
        };
        ui.show_status(
            kind,
            &format!("{} | {}", self.ctx.platform.summary(), support),
        );
        ui.message("");
    }

    fn main_menu(&self) -> Menu<String> {
        let entries = MAIN_MENU
            .iter()
            .map(|(label, description, value)| {
                Entry::new(*label, value.to_string()).with_description(*description)
            })
            .collect();
        Menu::new(
            "What would you like to do?",
            entries,
            self.ctx.config.menu_height,
        )
    }

    fn run_action(&self, action: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match action {
            "check" => CheckCommand::new(self.ctx, CheckArgs::default()).execute(ui),
            "install" => InstallCommand::new(self.ctx, InstallArgs::default()).execute(ui),
            "doctor" => DoctorCommand::new(self.ctx).execute(ui),
            "version" => VersionCommand::new(self.ctx, VersionArgs::default()).execute(ui),
            other => {
                tracing::warn!("unknown menu action '{}'", other);
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for MenuCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            return Err(TakeoffError::TerminalUnavailable {
                message: "the main menu needs an interactive terminal; try `takeoff --help`"
                    .to_string(),
            });
        }

        self.show_banner(ui);

        loop {
            let action = match ui.select(self.main_menu())? {
                Outcome::Committed(action) => action,
                Outcome::Cancelled => "quit".to_string(),
            };
            tracing::debug!("menu action: {}", action);

            if action == "quit" {
                ui.success("Thank you for using Flutter Takeoff! 👋");
                return Ok(CommandResult::success());
            }

            match self.run_action(&action, ui) {
                Ok(_) => {}
                Err(e @ TakeoffError::TerminalUnavailable { .. }) => return Err(e),
                Err(e) => ui.error(&e.to_string()),
            }
            ui.wait_for_enter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing;
    use crate::ui::MockUI;
    use console::Key;

    #[test]
    fn cancel_behaves_as_exit() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.queue_menu_cancel();

        let result = MenuCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Thank you for using Flutter Takeoff!"));
        assert_eq!(ui.waits(), 0);
    }

    #[test]
    fn banner_shows_version_and_platform() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();

        MenuCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(ui.has_message("Flutter Takeoff"));
        assert!(ui.has_hint("v1.0.1 | Android + Web + Linux Desktop"));
        assert!(ui.has_status(StatusKind::Warning, "Linux 64-bit | Experimental"));
    }

    #[test]
    fn each_action_waits_for_enter() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.queue_selection("check");
        ui.queue_selection("version");
        ui.queue_selection("quit");

        MenuCommand::new(&ctx).execute(&mut ui).unwrap();

        assert_eq!(ui.menus_shown().len(), 3);
        assert_eq!(ui.waits(), 2);
        assert!(ui.headers().iter().any(|h| h == "Checking Dependencies"));
        assert!(ui.headers().iter().any(|h| h == "Version Information"));
    }

    #[test]
    fn keys_reach_the_real_menu() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        // End -> "Exit"
        ui.queue_menu_keys(vec![Key::End, Key::Enter]);

        MenuCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(ui.has_success("Thank you for using Flutter Takeoff!"));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn doctor_failure_keeps_the_loop_alive() {
        let ctx = testing::bare_host();
        let mut ui = MockUI::new();
        ui.queue_selection("doctor");
        ui.queue_selection("quit");

        let result = MenuCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_error("Failed to run flutter doctor"));
        assert_eq!(ui.waits(), 1);
    }

    #[test]
    fn requires_terminal() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.set_interactive(false);

        let err = MenuCommand::new(&ctx).execute(&mut ui).unwrap_err();

        assert!(matches!(err, TakeoffError::TerminalUnavailable { .. }));
    }

    #[test]
    fn menu_lists_five_actions() {
        let ctx = testing::all_installed();
        let menu = MenuCommand::new(&ctx).main_menu();
        let labels: Vec<&str> = menu
            .list()
            .entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(
            labels,
            [
                "Check Dependencies",
                "Install Flutter SDK",
                "Run Flutter Doctor",
                "Version Info",
                "Exit"
            ]
        );
    }
}
