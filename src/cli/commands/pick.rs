//! Pick command implementation.
//!
//! `takeoff pick` opens the directory browser on its own and prints the
//! chosen path to stdout, so it can be used from scripts:
//!
//! ```text
//! cd "$(takeoff pick ~/projects)"
//! ```

use crate::cli::args::PickArgs;
use crate::error::{Result, TakeoffError};
use crate::ui::{DirectoryBrowser, Outcome, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The pick command implementation.
pub struct PickCommand<'a> {
    ctx: &'a AppContext<'a>,
    args: PickArgs,
}

impl<'a> PickCommand<'a> {
    /// Create a new pick command.
    pub fn new(ctx: &'a AppContext<'a>, args: PickArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for PickCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            return Err(TakeoffError::TerminalUnavailable {
                message: "the directory picker needs an interactive terminal".to_string(),
            });
        }

        let start = match &self.args.start {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        let browser = DirectoryBrowser::new(&start, self.ctx.config.picker_height)
            .with_hidden(self.args.hidden || self.ctx.config.show_hidden);

        match ui.pick_directory(browser)? {
            Outcome::Committed(path) => {
                println!("{}", path.display());
                Ok(CommandResult::success())
            }
            Outcome::Cancelled => {
                ui.warning("No directory selected");
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing;
    use crate::ui::MockUI;
    use console::Key;
    use std::fs;
    use tempfile::TempDir;

    fn args(start: &std::path::Path) -> PickArgs {
        PickArgs {
            start: Some(start.to_path_buf()),
            hidden: false,
        }
    }

    #[test]
    fn committed_pick_succeeds() {
        let temp = TempDir::new().unwrap();
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.queue_pick(temp.path());

        let result = PickCommand::new(&ctx, args(temp.path()))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.pick_starts(), [temp.path().to_path_buf()]);
    }

    #[test]
    fn keys_drive_the_real_browser() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("lib")).unwrap();
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        // ".." then "lib": move down, enter, select
        ui.queue_pick_keys(vec![Key::ArrowDown, Key::Enter, Key::Char('s')]);

        let result = PickCommand::new(&ctx, args(temp.path()))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
    }

    #[test]
    fn cancel_exits_non_zero() {
        let temp = TempDir::new().unwrap();
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.queue_pick_keys(vec![Key::Escape]);

        let result = PickCommand::new(&ctx, args(temp.path()))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("No directory selected"));
    }

    #[test]
    fn requires_terminal() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();
        ui.set_interactive(false);

        let err = PickCommand::new(&ctx, PickArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, TakeoffError::TerminalUnavailable { .. }));
    }
}
