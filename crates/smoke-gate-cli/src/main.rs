// crates/smoke-gate-cli/src/main.rs
// ============================================================================
// Module: Smoke Gate CLI Entry Point
// Description: Command dispatcher for the deployment smoke suite.
// Purpose: Provide a safe, localized CLI that runs the suite and reports.
// Dependencies: clap, smoke-gate-core, smoke-gate-checks, smoke-gate-config,
//               serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The Smoke Gate CLI runs the fixed deployment check suite against a target
//! host and renders the operator report. All user-facing strings are routed
//! through the i18n catalog to prepare for future localization. The process
//! exits zero only when every check passes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use smoke_gate_checks::SUITE_SIZE;
use smoke_gate_checks::SuitePlan;
use smoke_gate_checks::service_endpoints;
use smoke_gate_cli::i18n::Locale;
use smoke_gate_cli::i18n::set_locale;
use smoke_gate_cli::t;
use smoke_gate_config::SmokeGateConfig;
use smoke_gate_core::EnvironmentLabel;
use smoke_gate_core::NullProgressSink;
use smoke_gate_core::Outcome;
use smoke_gate_core::ProgressSink;
use smoke_gate_core::RunSummary;
use smoke_gate_core::SystemSleeper;
use smoke_gate_core::TargetHost;
use smoke_gate_core::Verdict;
use smoke_gate_core::format_summary;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "SMOKE_GATE_LANG";
/// Maximum detail lines echoed per failing check during progress output.
const PROGRESS_DETAIL_LINES: usize = 4;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "smoke-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `SMOKE_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the deployment smoke suite against a target host.
    Run(RunCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `run` command.
#[derive(Args, Debug)]
struct RunCommand {
    /// Environment label recorded in the report (e.g. staging).
    #[arg(long, value_name = "LABEL")]
    environment: String,
    /// Host the deployed tiers are reachable on.
    #[arg(long, value_name = "HOST")]
    target: String,
    /// Optional config file path (defaults to smoke-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Report output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// Skip the readiness probe and run checks immediately.
    #[arg(long, action = ArgAction::SetTrue)]
    skip_probe: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Smoke Gate configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to smoke-gate.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported report formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum FormatArg {
    /// Human-readable report lines.
    Text,
    /// Machine-readable run summary JSON.
    Json,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Run(command) => command_run(command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Executes the `run` command.
fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let config = SmokeGateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("run.config.load_failed", error = err)))?;
    let environment = EnvironmentLabel::new(command.environment);
    let target = TargetHost::new(command.target);
    let endpoints = service_endpoints(&config, &target);
    let plan = SuitePlan::new(&config, environment, target)
        .map_err(|err| CliError::new(t!("run.suite.failed", error = err)))?;

    let summary = match command.format {
        FormatArg::Text => plan
            .execute(ConsoleSink, SystemSleeper, command.skip_probe)
            .map_err(|err| CliError::new(t!("run.suite.failed", error = err)))?,
        FormatArg::Json => plan
            .execute(NullProgressSink, SystemSleeper, command.skip_probe)
            .map_err(|err| CliError::new(t!("run.suite.failed", error = err)))?,
    };

    match command.format {
        FormatArg::Text => {
            for line in format_summary(&summary, &endpoints) {
                write_stdout_line(&line)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
        FormatArg::Json => {
            let rendered = serde_json::to_string_pretty(&summary)
                .map_err(|err| CliError::new(t!("run.json.failed", error = err)))?;
            write_stdout_line(&rendered)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }

    Ok(exit_code_for(&summary))
}

/// Maps a finalized summary to the process exit code.
fn exit_code_for(summary: &RunSummary) -> ExitCode {
    if summary.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Progress sink echoing each check as it completes.
struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn on_check(&mut self, ordinal: u64, outcome: &Outcome) {
        let line = t!(
            "run.progress.entry",
            ordinal = ordinal,
            total = SUITE_SIZE,
            verdict = outcome.verdict.as_str(),
            name = outcome.check.name
        );
        let _ = write_stdout_line(&line);
        if outcome.verdict == Verdict::Fail
            && let Some(excerpt) = outcome.detail_excerpt(PROGRESS_DETAIL_LINES)
        {
            for detail_line in excerpt.lines() {
                let _ = write_stdout_line(&t!("run.progress.detail", detail = detail_line));
            }
        }
    }

    fn on_warning(&mut self, message: &str) {
        let _ = write_stderr_line(&t!("run.warning", message = message));
    }
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes `config` subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => {
            SmokeGateConfig::load(command.config.as_deref())
                .map_err(|err| CliError::new(t!("config.validate.failed", error = err)))?;
            write_stdout_line(&t!("config.validate.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Prints top-level usage when no subcommand is given.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}
