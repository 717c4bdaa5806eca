//! Subcommands

use std::io::{Read, Write};

use clap::Subcommand;
use serde::Serialize;

use crate::error::CliError;

mod run;
mod status;

pub(crate) use run::RunArgs;
pub(crate) use status::StatusArgs;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Run the cart-lines discount function on a `CartInput` document
    CartLines(RunArgs),

    /// Run the delivery-options discount function on a `DeliveryInput` document
    DeliveryOptions(RunArgs),

    /// Report whether a discount window is scheduled, active or expired
    Status(StatusArgs),
}

impl Command {
    /// Execute the command, reading from `stdin` when no input file is given.
    pub(crate) fn execute(
        &self,
        stdin: impl Read,
        stdout: impl Write,
        pretty: bool,
    ) -> Result<(), CliError> {
        match self {
            Command::CartLines(args) => run::cart_lines(args, stdin, stdout, pretty),
            Command::DeliveryOptions(args) => run::delivery_options(args, stdin, stdout, pretty),
            Command::Status(args) => status::run(args, stdout, pretty),
        }
    }
}

fn write_json(mut writer: impl Write, value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    writeln!(writer)?;

    Ok(())
}
