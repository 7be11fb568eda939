//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use bitwise::compression::compress::compress_file;
use bitwise::compression::decompress::verify_file;
use bitwise::tools::cli::{bitopts_init, BitOpts, Verbosity};
use bitwise::Result;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows
    // this down once it is parsed.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }

    let options = bitopts_init();

    match run(&options) {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Compress the input, then read the output back and check it decompresses to the input.
fn run(options: &BitOpts) -> Result<()> {
    let (data, compressed) = compress_file(options)?;
    report(options, &compressed);

    if options.verify {
        let decompressed = verify_file(options, &data)?;
        report(options, &decompressed);
    }
    Ok(())
}

fn report(options: &BitOpts, line: &impl std::fmt::Display) {
    if options.verbose > Verbosity::Quiet {
        println!("{}", line);
    }
}
