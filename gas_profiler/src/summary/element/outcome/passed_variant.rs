//!
//! The gas profiler summary element passed outcome variant.
//!

///
/// The gas profiler summary element passed outcome variant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassedVariant {
    /// The contract deploy.
    Deploy {
        /// The created contract address.
        address: web3::types::Address,
        /// The runtime code size in bytes.
        size: usize,
        /// The gas used.
        gas_used: u64,
    },
    /// The committed method call.
    Transaction {
        /// The gas used.
        gas_used: u64,
    },
    /// The method call estimation.
    Estimate {
        /// The estimated gas.
        gas: u64,
    },
}
