//!
//! The profiling case.
//!

///
/// The profiling case.
///
/// The cases run in declaration order, each over every contract.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Deploys every contract.
    Deploy,
    /// Calls the method on every contract as a committed transaction.
    Transaction,
    /// Estimates the method on every contract and prints the estimates.
    Estimate,
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deploy => write!(f, "before all"),
            Self::Transaction => write!(f, "succeeds profiling"),
            Self::Estimate => write!(f, "can profile"),
        }
    }
}
