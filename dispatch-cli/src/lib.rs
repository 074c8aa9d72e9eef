//! Command-line interface for the dispatch engine.
//!
//! `dispatch assign` runs one order through the assignment engine against a
//! JSON fleet dataset and a JSON location table. `dispatch orders`,
//! `dispatch vehicles` and `dispatch drivers` print the dataset's records.
//! Paths may come from flags, configuration files or `DISPATCH_*`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod assign;
mod error;
mod fs;
mod list;

pub use error::CliError;

use assign::{AssignArgs, run_assign};
use list::{ListArgs, RecordKind, run_list};

pub(crate) const ARG_ORDER_ID: &str = "order-id";
pub(crate) const ARG_FLEET: &str = "fleet";
pub(crate) const ARG_LOCATIONS: &str = "locations";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ENV_ASSIGN_ORDER_ID: &str = "DISPATCH_CMDS_ASSIGN_ORDER_ID";
pub(crate) const ENV_ASSIGN_FLEET: &str = "DISPATCH_CMDS_ASSIGN_FLEET";
pub(crate) const ENV_ASSIGN_LOCATIONS: &str = "DISPATCH_CMDS_ASSIGN_LOCATIONS";
pub(crate) const ENV_LIST_FLEET: &str = "DISPATCH_CMDS_LIST_FLEET";

/// Run the dispatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, an
/// input file cannot be loaded, the engine rejects the order, or output
/// cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &mut stdout)
}

fn execute(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Assign(args) => run_assign(args, writer),
        Command::Orders(args) => run_list(args, RecordKind::Orders, writer),
        Command::Vehicles(args) => run_list(args, RecordKind::Vehicles, writer),
        Command::Drivers(args) => run_list(args, RecordKind::Drivers, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch",
    about = "Assign vehicles and drivers to delivery orders",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose a vehicle and a driver for one order.
    Assign(AssignArgs),
    /// Print every order in the fleet dataset.
    Orders(ListArgs),
    /// Print every vehicle in the fleet dataset.
    Vehicles(ListArgs),
    /// Print every driver in the fleet dataset.
    Drivers(ListArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
