// crates/price-grid-cli/src/main.rs
// ============================================================================
// Module: Price Grid CLI Entry Point
// Description: Command dispatcher for serving and editing the pricing matrix.
// Purpose: Provide a small CLI for server execution and remote edits.
// Dependencies: clap, price-grid-config, price-grid-core, price-grid-server, tokio
// ============================================================================

//! ## Overview
//! The Price Grid CLI starts the pricing API server and drives remote edits
//! against a running instance. Edit commands load the persisted matrix first,
//! apply the pure editor transition locally, and post the resulting full
//! matrix back through the validate-and-store endpoint.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use price_grid_config::PriceGridConfig;
use price_grid_core::EditAction;
use price_grid_core::EditorState;
use price_grid_core::Matrix;
use price_grid_core::Term;
use price_grid_core::Tier;
use price_grid_core::apply;
use price_grid_core::parse_cell_value;
use price_grid_server::ApiServer;
use thiserror::Error;

use crate::client::PricingClient;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL for edit commands.
const DEFAULT_URL: &str = "http://127.0.0.1:3000";
/// Default request timeout for edit commands.
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "price-grid", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the pricing API server.
    Serve(ServeCommand),
    /// Print the persisted pricing matrix.
    Show(ShowCommand),
    /// Edit one cell and save the resulting matrix.
    Set(SetCommand),
    /// Reset every cell to zero and save.
    Clear(ClearCommand),
}

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to price-grid.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Shared connection arguments for edit commands.
#[derive(Args, Debug, Clone)]
struct EndpointArgs {
    /// Base URL of the pricing server.
    #[arg(long, value_name = "URL", default_value = DEFAULT_URL)]
    url: String,
    /// Request timeout in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
struct ShowCommand {
    /// Connection settings.
    #[command(flatten)]
    endpoint: EndpointArgs,
}

/// Arguments for the `set` command.
#[derive(Args, Debug)]
struct SetCommand {
    /// Connection settings.
    #[command(flatten)]
    endpoint: EndpointArgs,
    /// Contract term of the cell to edit.
    #[arg(long, value_enum, value_name = "TERM")]
    term: TermArg,
    /// Pricing tier of the cell to edit.
    #[arg(long, value_enum, value_name = "TIER")]
    tier: TierArg,
    /// New cell value. Editing the lite tier derives the sibling tiers.
    #[arg(long, value_name = "VALUE")]
    value: String,
}

/// Arguments for the `clear` command.
#[derive(Args, Debug)]
struct ClearCommand {
    /// Connection settings.
    #[command(flatten)]
    endpoint: EndpointArgs,
}

/// Contract term selection.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum TermArg {
    /// 36-month contract.
    #[value(name = "36months")]
    Months36,
    /// 24-month contract.
    #[value(name = "24months")]
    Months24,
    /// 12-month contract.
    #[value(name = "12months")]
    Months12,
    /// Month-to-month contract.
    #[value(name = "mtm")]
    MonthToMonth,
}

impl TermArg {
    /// Converts the argument into the core term.
    const fn term(self) -> Term {
        match self {
            Self::Months36 => Term::Months36,
            Self::Months24 => Term::Months24,
            Self::Months12 => Term::Months12,
            Self::MonthToMonth => Term::MonthToMonth,
        }
    }
}

/// Pricing tier selection.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum TierArg {
    /// Lite tier. Edits here derive the sibling tiers.
    Lite,
    /// Standard tier.
    Standard,
    /// Unlimited tier.
    Unlimited,
}

impl TierArg {
    /// Converts the argument into the core tier.
    const fn tier(self) -> Tier {
        match self {
            Self::Lite => Tier::Lite,
            Self::Standard => Tier::Standard,
            Self::Unlimited => Tier::Unlimited,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
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
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("price-grid {version}"))
            .map_err(|err| CliError::new(format!("failed to write to stdout: {err}")))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        return Err(CliError::new("no command given; see --help".to_string()));
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Show(command) => command_show(command).await,
        Commands::Set(command) => command_set(command).await,
        Commands::Clear(command) => command_clear(command).await,
    }
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = PriceGridConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load configuration: {err}")))?;
    let server = ApiServer::from_config(&config)
        .map_err(|err| CliError::new(format!("failed to initialize server: {err}")))?;
    server
        .serve()
        .await
        .map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Edit Commands
// ============================================================================

/// Executes the `show` command.
async fn command_show(command: ShowCommand) -> CliResult<ExitCode> {
    let client = endpoint_client(&command.endpoint)?;
    let matrix = client.fetch_matrix().await.map_err(|err| CliError::new(err.to_string()))?;
    print_matrix(&matrix)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `set` command.
///
/// The persisted matrix is loaded first so the edit applies on top of the
/// current record. Lite-tier edits derive the sibling tiers through the same
/// transition the grid applies.
async fn command_set(command: SetCommand) -> CliResult<ExitCode> {
    if parse_cell_value(&command.value).is_none() {
        return Err(CliError::new(format!("value {:?} is not a finite number", command.value)));
    }
    let client = endpoint_client(&command.endpoint)?;
    let matrix = client.fetch_matrix().await.map_err(|err| CliError::new(err.to_string()))?;

    let state = apply(&EditorState::new(), EditAction::Load {
        matrix,
    });
    let state = apply(&state, EditAction::EditCell {
        term: command.term.term(),
        tier: command.tier.tier(),
        raw_value: command.value,
    });

    let saved =
        client.save_matrix(&state.current).await.map_err(|err| CliError::new(err.to_string()))?;
    print_matrix(&saved)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `clear` command.
async fn command_clear(command: ClearCommand) -> CliResult<ExitCode> {
    let client = endpoint_client(&command.endpoint)?;
    let matrix = client.fetch_matrix().await.map_err(|err| CliError::new(err.to_string()))?;

    let state = apply(&EditorState::new(), EditAction::Load {
        matrix,
    });
    let state = apply(&state, EditAction::Clear);

    let saved =
        client.save_matrix(&state.current).await.map_err(|err| CliError::new(err.to_string()))?;
    print_matrix(&saved)?;
    Ok(ExitCode::SUCCESS)
}

/// Builds a pricing client from connection arguments.
fn endpoint_client(endpoint: &EndpointArgs) -> CliResult<PricingClient> {
    PricingClient::new(&endpoint.url, Duration::from_millis(endpoint.timeout_ms))
        .map_err(|err| CliError::new(err.to_string()))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a pretty-printed matrix to stdout.
fn print_matrix(matrix: &Matrix) -> CliResult<()> {
    let mut encoded = serde_json::to_vec_pretty(matrix)
        .map_err(|err| CliError::new(format!("failed to encode matrix: {err}")))?;
    encoded.push(b'\n');
    let mut stdout = std::io::stdout();
    stdout
        .write_all(&encoded)
        .map_err(|err| CliError::new(format!("failed to write to stdout: {err}")))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
