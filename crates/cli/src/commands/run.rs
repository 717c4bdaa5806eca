use std::{
    fs,
    io::{Read, Write},
    path::PathBuf,
};

use clap::Args;
use rebate::{
    functions::{
        RunError, cart_delivery_options_discounts_generate_run, cart_lines_discounts_generate_run,
    },
    input::{CartInput, DeliveryInput},
    operations::FunctionRunResult,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{commands::write_json, error::CliError};

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    /// Input JSON document; read from stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl RunArgs {
    fn read_input(&self, mut stdin: impl Read) -> Result<String, CliError> {
        match &self.input {
            Some(path) => {
                debug!(path = %path.display(), "reading input file");

                Ok(fs::read_to_string(path)?)
            }
            None => {
                let mut contents = String::new();
                stdin.read_to_string(&mut contents)?;

                Ok(contents)
            }
        }
    }
}

fn run_function<I, F>(
    args: &RunArgs,
    stdin: impl Read,
    stdout: impl Write,
    pretty: bool,
    function: F,
) -> Result<(), CliError>
where
    I: DeserializeOwned,
    F: FnOnce(&I) -> Result<FunctionRunResult, RunError>,
{
    let contents = args.read_input(stdin)?;
    let input: I = serde_json::from_str(&contents)?;
    let result = function(&input)?;

    debug!(operations = result.len(), "function run complete");

    write_json(stdout, &result, pretty)
}

pub(crate) fn cart_lines(
    args: &RunArgs,
    stdin: impl Read,
    stdout: impl Write,
    pretty: bool,
) -> Result<(), CliError> {
    run_function::<CartInput, _>(args, stdin, stdout, pretty, cart_lines_discounts_generate_run)
}

pub(crate) fn delivery_options(
    args: &RunArgs,
    stdin: impl Read,
    stdout: impl Write,
    pretty: bool,
) -> Result<(), CliError> {
    run_function::<DeliveryInput, _>(
        args,
        stdin,
        stdout,
        pretty,
        cart_delivery_options_discounts_generate_run,
    )
}
