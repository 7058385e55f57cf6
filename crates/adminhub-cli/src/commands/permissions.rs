//! Permission catalog listing.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use adminhub_core::error::AppError;
use adminhub_entity::permission::PermissionCatalog;

use crate::output::{self, OutputFormat};

/// Arguments for permission commands
#[derive(Debug, Args)]
pub struct PermissionsArgs {
    /// Permission subcommand
    #[command(subcommand)]
    pub command: PermissionsCommand,
}

/// Permission subcommands
#[derive(Debug, Subcommand)]
pub enum PermissionsCommand {
    /// List every permission in the catalog
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct PermissionRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Permission")]
    name: &'static str,
}

fn rows() -> Vec<PermissionRow> {
    PermissionCatalog::grouped()
        .into_iter()
        .flat_map(|(group, names)| {
            names.into_iter().map(move |name| PermissionRow {
                group: group.as_str(),
                name,
            })
        })
        .collect()
}

/// Execute permission commands
pub fn execute(args: &PermissionsArgs, format: OutputFormat) -> Result<(), AppError> {
    match args.command {
        PermissionsCommand::List => output::print_list(&rows(), format),
    }
    Ok(())
}
