//! Version command implementation.
//!
//! The `takeoff version` command shows build metadata and project links.

use crate::cli::args::VersionArgs;
use crate::error::{Result, TakeoffError};
use crate::ui::UserInterface;

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// Project home page.
pub const REPOSITORY_URL: &str = "https://github.com/LahiruHW/flutter-takeoff";

/// The version command implementation.
pub struct VersionCommand<'a> {
    ctx: &'a AppContext<'a>,
    args: VersionArgs,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command.
    pub fn new(ctx: &'a AppContext<'a>, args: VersionArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let meta = &self.ctx.meta;
        let info = meta.build_info();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&info).map_err(|e| TakeoffError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Version Information");
        ui.success(&format!("Version: {}", info.version));
        ui.message(&format!("Build Date: {}", info.build_date));
        ui.message(&format!("Git Commit: {}", info.git_commit));
        ui.message(&format!("Git Branch: {}", info.git_branch));

        match meta.build_date() {
            Ok(date) => tracing::debug!("built {}", date.format("%Y-%m-%d %H:%M UTC")),
            Err(e) => tracing::debug!("{:#}", e),
        }

        if meta.is_prerelease() {
            ui.message("");
            ui.warning("This is a pre-release version");
        }

        ui.message("");
        ui.show_hint(&format!("GitHub: {}", REPOSITORY_URL));
        ui.show_hint(&format!("Report issues: {}/issues", REPOSITORY_URL));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing;
    use crate::ui::MockUI;
    use crate::version::BuildMeta;

    #[test]
    fn shows_metadata_and_links() {
        let ctx = testing::all_installed();
        let mut ui = MockUI::new();

        VersionCommand::new(&ctx, VersionArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_success("Version: 1.0.1"));
        assert!(ui.has_message("Build Date: unknown"));
        assert!(ui.has_message("Git Branch: unknown"));
        assert!(ui.has_hint("GitHub: https://github.com/LahiruHW/flutter-takeoff"));
        assert!(ui.has_hint("/flutter-takeoff/issues"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn prerelease_is_flagged() {
        let mut ctx = testing::all_installed();
        ctx.meta = BuildMeta {
            pre_release: "beta.2",
            ..ctx.meta
        };
        let mut ui = MockUI::new();

        VersionCommand::new(&ctx, VersionArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("pre-release"));
    }
}
