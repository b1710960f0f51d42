//! CLI helpers.

pub(crate) mod error;
mod output;
mod stderr_logger;


use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

pub use self::error::{error_context, LineCol};
pub use self::output::Output;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Path to the input file.
    pub path: PathBuf,
    /// Run in verbose mode.
    verbose: bool,
}

impl Opts {
    /// Parse CLI options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        let level = if opts.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        };

        log::set_max_level(level);
        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut path = None;
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    if path.is_some() {
                        bail!("unexpected argument: {other}");
                    }

                    path = Some(PathBuf::from(other));
                }
            }
        }

        for arg in it {
            if path.is_some() {
                bail!("unexpected argument: {}", arg.to_string_lossy());
            }

            path = Some(PathBuf::from(arg));
        }

        opts.path = path.context("missing input path")?;
        Ok(opts)
    }
}
