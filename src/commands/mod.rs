use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};

mod invocation;
use invocation::{Invocation, Parsed};

use crate::emit::write_array_from_file;

/// Converts binary files into `U8` array declarations with matching `Usize` size constants.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct MakeArray {
    /// `(name, path)` pairs followed by the path of the generated file.
    #[clap(
        value_name = "NAME PATH... OUTPUT",
        value_parser = clap::value_parser!(OsString),
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Usage,
    MissingOutput,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success | Status::Usage => ExitCode::SUCCESS,
            Status::MissingOutput => ExitCode::from(1),
        }
    }
}

impl MakeArray {
    /// Renders every input in argument order and writes the result to the output path.
    ///
    /// Usage and missing-output messages go to `stdout`. Nothing is written to the output
    /// path unless every input was read.
    pub fn run<W>(self, program: &str, mut stdout: W) -> Result<Status>
    where
        W: Write,
    {
        let invocation = match Invocation::from_args(&self.args) {
            Parsed::Invocation(invocation) => invocation,
            Parsed::Usage => {
                writeln!(stdout, "Usage: \"{program} (name, path)+ output\".")?;
                return Ok(Status::Usage);
            }
            Parsed::MissingOutput => {
                writeln!(stdout, "Error: No output given.")?;
                return Ok(Status::MissingOutput);
            }
        };

        let mut generated = Vec::new();
        for unit in &invocation.units {
            write_array_from_file(&mut generated, &unit.name.to_string_lossy(), &unit.path)
                .wrap_err_with(|| format!("Failed to read {}", unit.path.display()))?;
        }

        std::fs::write(&invocation.output, generated)
            .wrap_err_with(|| format!("Failed to write {}", invocation.output.display()))?;

        Ok(Status::Success)
    }
}
