use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

mod commands;
use commands::MakeArray;

mod emit;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());

    let cli = MakeArray::parse();
    let status = cli.run(&program, std::io::stdout().lock())?;

    Ok(status.into())
}
