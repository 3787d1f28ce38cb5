//!
//! The gas profiler JSON report.
//!

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

///
/// The gas profiler JSON report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// The profiled contracts, by name.
    pub contracts: BTreeMap<String, ContractReport>,
}

///
/// The profiled contract report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContractReport {
    /// The deployed contract address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<web3::types::Address>,
    /// The runtime code size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// The deploy transaction gas used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_gas: Option<u64>,
    /// The profiled methods, by signature.
    pub methods: BTreeMap<String, MethodReport>,
}

///
/// The profiled method report.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MethodReport {
    /// The committed transaction gas used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_gas: Option<u64>,
    /// The gas estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u64>,
}

impl Report {
    ///
    /// Writes the report to a file as pretty-printed JSON.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(self).expect("Always valid");
        std::fs::write(path, contents)
            .with_context(|| format!("Report file {path:?} writing"))?;
        Ok(())
    }
}
