//! Doctor command implementation.
//!
//! Runs `flutter doctor -v` and shows its output unchanged.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand<'a> {
    ctx: &'a AppContext<'a>,
}

impl<'a> DoctorCommand<'a> {
    /// Create a new doctor command.
    pub fn new(ctx: &'a AppContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for DoctorCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Running Flutter Doctor");

        let mut spinner = ui.start_spinner("Running flutter doctor -v...");
        match (self.ctx.exec)("flutter", &["doctor", "-v"]) {
            Ok(output) => {
                spinner.finish_success("flutter doctor finished");
                ui.message(output.output.trim_end());
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("flutter doctor failed");
                tracing::debug!("flutter doctor: {:?}", e);
                ui.error("Failed to run flutter doctor");
                ui.show_hint(&format!("Error: {}", e));
                ui.show_hint("Make sure Flutter is installed and added to PATH");
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

    #[test]
    fn doctor_output_is_passed_through() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();

        let result = DoctorCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("[✓] flutter doctor -v ran"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn doctor_failure_explains_and_hints() {
        let ctx = testing::bare_host();
        let mut ui = MockUI::new();

        let result = DoctorCommand::new(&ctx).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to run flutter doctor"));
        assert!(ui.has_hint("Error: Tool not found: flutter"));
        assert!(ui.has_hint("Make sure Flutter is installed and added to PATH"));
    }
}
