//! Assign command implementation for the dispatch CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dispatch_assign::{AssignmentService, DriverSelector, RandomDriverSelector};
use dispatch_core::{AssignmentResult, FleetDataset, LocationTable, MemoryFleetStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{open_reader, require_file};
use crate::{
    ARG_FLEET, ARG_LOCATIONS, ARG_ORDER_ID, ARG_SEED, CliError, ENV_ASSIGN_FLEET,
    ENV_ASSIGN_LOCATIONS, ENV_ASSIGN_ORDER_ID, write_json,
};

/// CLI arguments for the `assign` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "assign",
    long_about = "Assign a vehicle and a driver to one order. Eligible \
                 vehicles are ranked by distance to the pickup town (70%) \
                 and trip cost (30%); a driver is drawn at random from the \
                 available pool. Pass --seed for a reproducible draw.",
    about = "Assign a vehicle and driver to an order"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct AssignArgs {
    /// Identifier of the order to assign.
    #[arg(value_name = ARG_ORDER_ID)]
    #[serde(default)]
    pub(crate) order_id: Option<u64>,
    /// Path to the JSON fleet dataset.
    #[arg(long = ARG_FLEET, value_name = "path")]
    #[serde(default)]
    pub(crate) fleet: Option<Utf8PathBuf>,
    /// Path to the JSON location table.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Seed for the driver draw; omit for a random draw.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl AssignArgs {
    pub(crate) fn into_config(self) -> Result<AssignConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssignConfig::try_from(merged)
    }
}

/// Resolved `assign` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AssignConfig {
    pub(crate) order_id: u64,
    pub(crate) fleet: Utf8PathBuf,
    pub(crate) locations: Utf8PathBuf,
    pub(crate) seed: Option<u64>,
}

impl AssignConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.fleet, ARG_FLEET)?;
        require_file(&self.locations, ARG_LOCATIONS)?;
        Ok(())
    }
}

impl TryFrom<AssignArgs> for AssignConfig {
    type Error = CliError;

    fn try_from(args: AssignArgs) -> Result<Self, Self::Error> {
        let order_id = args.order_id.ok_or(CliError::MissingArgument {
            field: ARG_ORDER_ID,
            env: ENV_ASSIGN_ORDER_ID,
        })?;
        let fleet = args.fleet.ok_or(CliError::MissingArgument {
            field: ARG_FLEET,
            env: ENV_ASSIGN_FLEET,
        })?;
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_ASSIGN_LOCATIONS,
        })?;
        Ok(Self {
            order_id,
            fleet,
            locations,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_assign(args: AssignArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let result = execute_assign(&config)?;
    write_json(writer, &result)
}

pub(crate) fn execute_assign(config: &AssignConfig) -> Result<AssignmentResult, CliError> {
    let store = load_fleet(&config.fleet, ARG_FLEET)?;
    let locations = load_locations(&config.locations)?;
    log::debug!(
        "loaded {} towns from {}",
        locations.len(),
        config.locations
    );
    match config.seed {
        Some(seed) => assign_with(store, &locations, RandomDriverSelector::seeded(seed), config),
        None => assign_with(store, &locations, RandomDriverSelector::from_entropy(), config),
    }
}

fn assign_with<D: DriverSelector>(
    store: MemoryFleetStore,
    locations: &LocationTable,
    selector: D,
    config: &AssignConfig,
) -> Result<AssignmentResult, CliError> {
    let mut service = AssignmentService::new(store, locations, selector);
    Ok(service.assign_order(config.order_id)?)
}

/// Load and validate a fleet dataset into an in-memory store.
pub(crate) fn load_fleet(
    path: &Utf8Path,
    field: &'static str,
) -> Result<MemoryFleetStore, CliError> {
    let reader = open_reader(path, field)?;
    FleetDataset::from_reader(reader)
        .and_then(FleetDataset::into_store)
        .map_err(|source| CliError::LoadFleet {
            path: path.to_path_buf(),
            source,
        })
}

fn load_locations(path: &Utf8Path) -> Result<LocationTable, CliError> {
    let reader = open_reader(path, ARG_LOCATIONS)?;
    LocationTable::from_reader(reader).map_err(|source| CliError::LoadLocations {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AssignConfig, CliError> {
    let merged = AssignArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AssignConfig::try_from(merged)
}
