//!
//! The gas profiler arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas profiler arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints passed deploy and transaction cases too.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the summary box.
    #[arg(short, long)]
    pub quiet: bool,

    /// The JSON configuration file.
    /// Command-line arguments override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The artifact registry directory.
    /// Is set to `build/contracts` by default.
    #[arg(short, long)]
    pub artifacts: Option<PathBuf>,

    /// The contracts to profile, in order.
    /// Are set to `A` and `B` by default.
    #[arg(short, long = "contract")]
    pub contracts: Vec<String>,

    /// The method profiled on every contract.
    /// Is set to `profile` by default.
    #[arg(short, long)]
    pub method: Option<String>,

    /// The hardfork to execute with.
    /// Available arguments: `Shanghai`, `Cancun`, `Prague`.
    #[arg(long)]
    pub hardfork: Option<gas_profiler::Hardfork>,

    /// The block gas limit, which also caps transactions and estimations.
    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// The JSON report output path, if requested.
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("Verbose and quiet modes cannot be enabled simultaneously");
        }

        Ok(arguments)
    }

    ///
    /// Loads the configuration file, if any, and applies the command-line overrides.
    ///
    pub fn config(&self) -> anyhow::Result<gas_profiler::Config> {
        let mut config = match self.config.as_ref() {
            Some(path) => gas_profiler::Config::load(path.as_path())?,
            None => gas_profiler::Config::default(),
        };

        if let Some(artifacts) = self.artifacts.as_ref() {
            config.artifacts = artifacts.to_owned();
        }
        if !self.contracts.is_empty() {
            config.contracts = self.contracts.clone();
        }
        if let Some(method) = self.method.as_ref() {
            config.method = method.to_owned();
        }
        if let Some(hardfork) = self.hardfork {
            config.hardfork = hardfork;
        }
        if let Some(gas_limit) = self.gas_limit {
            config.gas_limit = gas_limit;
        }

        config.validate()
    }
}
