//! Implementation of the `repoforge make` command.
//!
//! Responsibility: wire adapters into the core scaffold service, run it,
//! and display the per-step outcomes. No scaffolding logic lives here.

use tracing::{debug, info, instrument};

use repoforge_adapters::{CommandModelGenerator, LocalFilesystem, stubs};
use repoforge_core::{
    application::{
        ArtifactWriter, RegistrationStore, ScaffoldPaths, ScaffoldReport, ScaffoldService,
        WriteOutcome, ports::Prompter,
    },
    domain::NameResolver,
};

use crate::{
    cli::{MakeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{FixedAnswerPrompter, InteractivePrompter},
};

/// How the model-creation question gets answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptMode {
    /// `--yes`: create a missing model without asking.
    AlwaysAccept,
    /// `--no-interaction` or `--quiet`: never ask, never create.
    AlwaysDecline,
    /// Ask on the terminal.
    Interactive,
}

/// Execute the `repoforge make` command.
///
/// Dispatch sequence:
/// 1. Assemble adapters and the core service from config
/// 2. Run the scaffold
/// 3. Render the per-artifact outcomes and the success line
#[instrument(skip_all, fields(resource = %args.name))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = build_service(&args, &global, &config);

    output.header(&format!("Scaffolding '{}'...", args.name.trim()))?;
    info!(resource = %args.name, "scaffold started");
    let report = service.scaffold(&args.name).map_err(CliError::Core)?;
    info!(resource = %args.name, "scaffold completed");

    render_report(&report, &output)?;
    Ok(())
}

// ── Service assembly ──────────────────────────────────────────────────────────

fn build_service(args: &MakeArgs, global: &GlobalArgs, config: &AppConfig) -> ScaffoldService {
    let stub_set = stubs::builtin();
    let filesystem = LocalFilesystem::new();

    let paths = ScaffoldPaths {
        app_root: config.paths.app_root.clone(),
        bindings_file: config.bindings_path(),
        extension: config.artifacts.extension.clone(),
    };
    debug!(
        app_root = %paths.app_root.display(),
        bindings = %paths.bindings_file.display(),
        "target layout resolved"
    );

    ScaffoldService::new(
        NameResolver::new(config.namespaces.clone()),
        stub_set.clone(),
        paths,
        ArtifactWriter::new(Box::new(filesystem)),
        RegistrationStore::new(Box::new(filesystem), stub_set.bindings),
        build_prompter(prompt_mode(args, global)),
        Box::new(CommandModelGenerator::new(
            config.model_tool.program.clone(),
            config.model_tool.args.clone(),
        )),
    )
}

/// Pick how the single confirmation question gets answered.
///
/// Quiet mode implies non-interactive: a suppressed prompt would otherwise
/// block waiting for input the user cannot see.
fn prompt_mode(args: &MakeArgs, global: &GlobalArgs) -> PromptMode {
    if args.yes {
        PromptMode::AlwaysAccept
    } else if args.no_interaction || global.quiet {
        PromptMode::AlwaysDecline
    } else {
        PromptMode::Interactive
    }
}

fn build_prompter(mode: PromptMode) -> Box<dyn Prompter> {
    match mode {
        PromptMode::AlwaysAccept => Box::new(FixedAnswerPrompter::accept()),
        PromptMode::AlwaysDecline => Box::new(FixedAnswerPrompter::decline()),
        PromptMode::Interactive => Box::new(InteractivePrompter),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn render_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.info(&format!("{}", report.interface_path.display()))?;

    render_write(
        report.interface_write,
        &report.interface_path.display().to_string(),
        out,
    )?;
    render_write(
        report.repository_write,
        &report.repository_path.display().to_string(),
        out,
    )?;

    if report.model_delegated {
        out.info(&format!("Model {} delegated to the model tool", report.model))?;
    }

    if report.registered {
        out.info(&format!(
            "Registered {} => {}",
            report.interface, report.repository
        ))?;
    } else {
        out.warning("Binding table left untouched (artifacts already existed)")?;
    }

    out.success("Repository created successfully.")?;
    Ok(())
}

fn render_write(outcome: WriteOutcome, path: &str, out: &OutputManager) -> CliResult<()> {
    match outcome {
        WriteOutcome::Written => out.print(&format!("  created {path}"))?,
        WriteOutcome::Skipped => out.print(&format!("  skipped {path} (already exists)"))?,
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn make_args(yes: bool, no_interaction: bool) -> MakeArgs {
        MakeArgs {
            name: "Order".into(),
            yes,
            no_interaction,
        }
    }

    fn global_args(quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn yes_flag_always_accepts() {
        let mode = prompt_mode(&make_args(true, false), &global_args(false));
        assert_eq!(mode, PromptMode::AlwaysAccept);
    }

    #[test]
    fn no_interaction_always_declines() {
        let mode = prompt_mode(&make_args(false, true), &global_args(false));
        assert_eq!(mode, PromptMode::AlwaysDecline);
    }

    #[test]
    fn quiet_implies_non_interactive() {
        let mode = prompt_mode(&make_args(false, false), &global_args(true));
        assert_eq!(mode, PromptMode::AlwaysDecline);
    }

    #[test]
    fn default_is_interactive() {
        let mode = prompt_mode(&make_args(false, false), &global_args(false));
        assert_eq!(mode, PromptMode::Interactive);
    }

    #[test]
    fn service_assembly_uses_configured_layout() {
        // Assembling the service must not touch the filesystem.
        let service = build_service(
            &make_args(false, true),
            &global_args(false),
            &AppConfig::default(),
        );
        // The service is opaque; this test is about construction not panicking.
        let _ = service;
    }
}
