//!
//! The gas profiler run configuration.
//!

use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

use crate::hardfork::Hardfork;

///
/// The gas profiler run configuration.
///
/// Every field is optional in the configuration file.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The artifact registry directory.
    pub artifacts: PathBuf,
    /// The contracts to profile, in order.
    pub contracts: Vec<String>,
    /// The method profiled on every contract.
    pub method: String,
    /// The transactions sender.
    pub caller: web3::types::Address,
    /// The sender balance in wei.
    pub caller_balance: u128,
    /// The block gas limit, which also caps transactions and estimations.
    pub gas_limit: u64,
    /// The hardfork to execute with.
    pub hardfork: Hardfork,
}

impl Config {
    /// The default artifact registry directory.
    pub const DEFAULT_ARTIFACTS_DIRECTORY: &'static str = "build/contracts";

    /// The default profiled method.
    pub const DEFAULT_METHOD: &'static str = "profile";

    /// The default transactions sender.
    pub const DEFAULT_CALLER: &'static str = "627306090abab3a6e1400e9345bc60c78a8bef57";

    /// The default sender balance, 100 ether.
    pub const DEFAULT_CALLER_BALANCE: u128 = 100 * 10_u128.pow(18);

    /// The default block gas limit.
    pub const DEFAULT_GAS_LIMIT: u64 = 30_000_000;

    /// The intrinsic cost of any transaction.
    pub const INTRINSIC_GAS: u64 = 21_000;

    ///
    /// Reads the configuration from a JSON file.
    ///
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Configuration file {path:?} opening"))?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Configuration file {path:?} parsing"))?;
        Ok(config)
    }

    ///
    /// Checks the invariants the types do not express.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.contracts.is_empty() {
            anyhow::bail!("At least one contract must be specified");
        }
        if let Some(name) = self.contracts.iter().find(|name| name.trim().is_empty()) {
            anyhow::bail!("Invalid contract name `{name}`");
        }
        if self.method.trim().is_empty() {
            anyhow::bail!("The profiled method name must not be empty");
        }
        if self.gas_limit < Self::INTRINSIC_GAS {
            anyhow::bail!(
                "The gas limit {} is below the intrinsic transaction cost {}",
                self.gas_limit,
                Self::INTRINSIC_GAS
            );
        }

        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifacts: PathBuf::from(Self::DEFAULT_ARTIFACTS_DIRECTORY),
            contracts: vec!["A".to_owned(), "B".to_owned()],
            method: Self::DEFAULT_METHOD.to_owned(),
            caller: web3::types::Address::from_str(Self::DEFAULT_CALLER).expect("Always valid"),
            caller_balance: Self::DEFAULT_CALLER_BALANCE,
            gas_limit: Self::DEFAULT_GAS_LIMIT,
            hardfork: Hardfork::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Config;
    use crate::hardfork::Hardfork;

    #[test]
    fn default_profiles_a_and_b() {
        let config = Config::default().validate().expect("Always valid");
        assert_eq!(config.contracts, vec!["A".to_owned(), "B".to_owned()]);
        assert_eq!(config.method, "profile");
        assert_eq!(config.hardfork, Hardfork::Prague);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("Temporary file");
        write!(
            file,
            r#"{{ "contracts": ["Token"], "hardfork": "Cancun", "gas_limit": 8000000 }}"#
        )
        .expect("Temporary file");

        let config = Config::load(file.path()).expect("Valid configuration");
        assert_eq!(config.contracts, vec!["Token".to_owned()]);
        assert_eq!(config.hardfork, Hardfork::Cancun);
        assert_eq!(config.gas_limit, 8_000_000);
        assert_eq!(config.method, Config::DEFAULT_METHOD);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("Temporary file");
        write!(file, r#"{{ "contract": "A" }}"#).expect("Temporary file");

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn empty_contracts_are_rejected() {
        let config = Config {
            contracts: vec![],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn gas_limit_below_intrinsic_is_rejected() {
        let config = Config {
            gas_limit: 20_999,
            ..Config::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("intrinsic"));
    }
}
