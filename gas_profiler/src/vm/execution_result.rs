//!
//! The VM execution result.
//!

///
/// The VM execution result of a successful transaction.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The created contract address, for deploy transactions.
    pub address: Option<revm::primitives::Address>,
    /// The gas used, after refunds.
    pub gas_used: u64,
    /// The gas refunded.
    pub gas_refunded: u64,
}

impl ExecutionResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        address: Option<revm::primitives::Address>,
        gas_used: u64,
        gas_refunded: u64,
    ) -> Self {
        Self {
            address,
            gas_used,
            gas_refunded,
        }
    }
}

///
/// The VM execution error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The transaction reverted.
    #[error("execution reverted with data 0x{output} (gas used {gas_used})")]
    Reverted {
        /// The hex revert data.
        output: String,
        /// The gas used.
        gas_used: u64,
    },
    /// The transaction halted, e.g. ran out of gas.
    #[error("execution halted: {reason} (gas used {gas_used})")]
    Halted {
        /// The halt reason.
        reason: String,
        /// The gas used.
        gas_used: u64,
    },
    /// The transaction was rejected before execution.
    #[error("transaction rejected: {0}")]
    Rejected(String),
    /// The VM returned an output that does not match the transaction kind.
    #[error("unexpected output: {0}")]
    UnexpectedOutput(String),
}

impl ExecutionError {
    ///
    /// Whether the transaction reached execution, as opposed to being rejected.
    ///
    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Reverted { .. } | Self::Halted { .. })
    }
}

impl TryFrom<revm::context::result::ExecutionResult> for ExecutionResult {
    type Error = ExecutionError;

    fn try_from(result: revm::context::result::ExecutionResult) -> Result<Self, Self::Error> {
        match result {
            revm::context::result::ExecutionResult::Success {
                output,
                gas_used,
                gas_refunded,
                ..
            } => {
                let address = match output {
                    revm::context::result::Output::Call(_) => None,
                    revm::context::result::Output::Create(_, address) => address,
                };
                Ok(Self::new(address, gas_used, gas_refunded))
            }
            revm::context::result::ExecutionResult::Revert { output, gas_used } => {
                Err(ExecutionError::Reverted {
                    output: hex::encode(output.as_ref()),
                    gas_used,
                })
            }
            revm::context::result::ExecutionResult::Halt { reason, gas_used } => {
                Err(ExecutionError::Halted {
                    reason: format!("{reason:?}"),
                    gas_used,
                })
            }
        }
    }
}
