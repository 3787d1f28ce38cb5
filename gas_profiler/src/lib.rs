//!
//! The gas profiler library.
//!

pub(crate) mod artifacts;
pub(crate) mod config;
pub(crate) mod hardfork;
pub(crate) mod instance;
pub(crate) mod profile;
pub(crate) mod summary;
pub(crate) mod vm;

pub use self::artifacts::artifact::Artifact;
pub use self::artifacts::Registry;
pub use self::config::Config;
pub use self::hardfork::Hardfork;
pub use self::instance::Instance;
pub use self::profile::case::Case;
pub use self::profile::description::CaseDescription;
pub use self::summary::element::outcome::passed_variant::PassedVariant;
pub use self::summary::element::outcome::Outcome;
pub use self::summary::element::Element;
pub use self::summary::report::ContractReport;
pub use self::summary::report::MethodReport;
pub use self::summary::report::Report;
pub use self::summary::Summary;
pub use self::vm::execution_result::ExecutionError;
pub use self::vm::execution_result::ExecutionResult;
pub use self::vm::revm::REVM;

use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use crate::profile::Profile;

///
/// The gas profiler.
///
pub struct GasProfiler {
    /// The summary.
    summary: Arc<Mutex<Summary>>,
    /// The run configuration.
    config: Config,
    /// The artifact registry.
    registry: Registry,
}

impl GasProfiler {
    /// The profiled context name.
    pub const CONTEXT_NAME: &'static str = "in normal operation";
}

impl GasProfiler {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(summary: Arc<Mutex<Summary>>, config: Config) -> anyhow::Result<Self> {
        let registry = Registry::new(config.artifacts.as_path())?;

        Ok(Self {
            summary,
            config,
            registry,
        })
    }

    ///
    /// Deploys every configured contract on a fresh chain and runs the profiling cases.
    ///
    pub fn run(self) -> anyhow::Result<()> {
        println!(
            "     {} {} {}",
            "Running".bright_green().bold(),
            self.config.contracts.join(" & "),
            Self::CONTEXT_NAME,
        );

        let mut vm = REVM::new(&self.config);
        let profile = Profile::new(self.config.contracts.clone(), self.config.method.clone());
        profile.run(self.summary.clone(), &self.registry, &mut vm);

        Ok(())
    }
}
