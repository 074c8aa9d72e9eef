//! Record listing commands (`orders`, `vehicles`, `drivers`).

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dispatch_core::{FleetStore, MemoryFleetStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::assign::load_fleet;
use crate::fs::require_file;
use crate::{ARG_FLEET, CliError, ENV_LIST_FLEET, write_json};

/// Which record collection to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    Orders,
    Vehicles,
    Drivers,
}

/// CLI arguments shared by the listing subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "list", about = "Print fleet records as JSON")]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct ListArgs {
    /// Path to the JSON fleet dataset.
    #[arg(long = ARG_FLEET, value_name = "path")]
    #[serde(default)]
    pub(crate) fleet: Option<Utf8PathBuf>,
}

impl ListArgs {
    fn into_fleet_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        fleet_path(merged)
    }
}

pub(crate) fn fleet_path(args: ListArgs) -> Result<Utf8PathBuf, CliError> {
    args.fleet.ok_or(CliError::MissingArgument {
        field: ARG_FLEET,
        env: ENV_LIST_FLEET,
    })
}

pub(crate) fn run_list(
    args: ListArgs,
    kind: RecordKind,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_fleet_path()?;
    require_file(&path, ARG_FLEET)?;
    let store = load_fleet(&path, ARG_FLEET)?;
    write_records(&store, kind, writer)
}

pub(crate) fn write_records(
    store: &MemoryFleetStore,
    kind: RecordKind,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match kind {
        RecordKind::Orders => write_json(writer, &store.orders().collect::<Vec<_>>()),
        RecordKind::Vehicles => write_json(writer, &store.vehicles().collect::<Vec<_>>()),
        RecordKind::Drivers => write_json(writer, &store.drivers().collect::<Vec<_>>()),
    }
}

#[cfg(test)]
pub(crate) fn fleet_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<Utf8PathBuf, CliError> {
    let merged = ListArgs::merge_from_layers(layers).map_err(CliError::from)?;
    fleet_path(merged)
}
