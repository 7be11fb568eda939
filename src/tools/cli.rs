use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Log level for this verbosity. Errors are always reported.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }

    fn from_count(v: u8) -> Self {
        match v {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Options that control one run of the program.
#[derive(Debug)]
pub struct BitOpts {
    /// File to compress
    pub input: PathBuf,
    /// File that receives the compressed stream
    pub output: PathBuf,
    /// Decompress the output again and compare it with the input
    pub verify: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl BitOpts {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            verify: true,
            verbose: Verbosity::Warnings,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Order-1 bit-tree arithmetic coder",
    long_about = "
    Compresses the input file into the output file with an adaptive binary arithmetic
    coder, then reads the output back and decompresses it to check the round trip.
    Byte counts, times and throughput are reported for both directions."
)]
pub struct Args {
    /// File to compress
    #[clap(value_parser)]
    input: PathBuf,

    /// Where to write the compressed stream
    #[clap(value_parser)]
    output: PathBuf,

    /// Skip the decompression check
    #[clap(long = "no-verify")]
    no_verify: bool,

    /// Only report errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. Repeat for more detail (-vvv traces the coder)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for BitOpts {
    fn from(args: Args) -> Self {
        let mut opts = BitOpts::new(args.input, args.output);
        opts.verify = !args.no_verify;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_count(args.verbose)
        };
        opts
    }
}

/// Parse the command line into BitOpts and set the log level to match. Exits with the
/// usage message if the arguments are not valid.
pub fn bitopts_init() -> BitOpts {
    let opts = BitOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Input file {}", opts.input.display());
    info!("Output file {}", opts.output.display());
    if !opts.verify {
        info!("Skipping verification")
    };
    opts
}
