use std::ffi::OsString;
use std::path::PathBuf;

/// Fewer arguments than this only prints the usage line.
pub const MIN_ARGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionUnit {
    pub name: OsString,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub units: Vec<EmissionUnit>,
    pub output: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Usage,
    MissingOutput,
    Invocation(Invocation),
}

impl Invocation {
    /// Splits `(name, path)+ output` into emission units and the output path.
    ///
    /// Pairs are taken while at least two arguments remain, so the output is whatever single
    /// argument is left over. An even argument count leaves nothing for the output.
    pub fn from_args(args: &[OsString]) -> Parsed {
        if args.len() < MIN_ARGS {
            return Parsed::Usage;
        }

        let mut units = Vec::with_capacity(args.len() / 2);
        let mut rest = args;

        while let [name, path, tail @ ..] = rest {
            units.push(EmissionUnit {
                name: name.clone(),
                path: PathBuf::from(path),
            });
            rest = tail;
        }

        match rest {
            [output] => Parsed::Invocation(Self {
                units,
                output: PathBuf::from(output),
            }),
            _ => Parsed::MissingOutput,
        }
    }
}
