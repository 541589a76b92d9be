//! Subcommand implementations, one module per entity kind.

pub mod categories;
pub mod content;
pub mod products;

use std::io::Write;

use commerce_bridge_connector::ConnectorError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The connector operation failed.
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    /// The result could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Print a result to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
