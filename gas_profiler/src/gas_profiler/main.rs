//!
//! The gas profiler executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    let config = arguments.config()?;
    println!(
        "    {} {} v{} ({}, gas limit {})",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        config.hardfork,
        config.gas_limit,
    );

    let summary = gas_profiler::Summary::new(arguments.verbose, arguments.quiet).wrap();

    let run_time_start = Instant::now();
    gas_profiler::GasProfiler::new(summary.clone(), config)?.run()?;

    let summary = gas_profiler::Summary::unwrap_arc(summary);
    print!("{summary}");
    println!(
        "    {} profiling in {}m{:02}s",
        "Finished".bright_green().bold(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if let Some(path) = arguments.report.as_ref() {
        summary.report().write_to_file(path.as_path())?;
    }

    if !summary.is_successful() {
        anyhow::bail!("");
    }

    Ok(())
}
