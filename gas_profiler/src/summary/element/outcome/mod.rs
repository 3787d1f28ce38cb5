//!
//! The gas profiler summary element outcome.
//!

pub mod passed_variant;

use self::passed_variant::PassedVariant;

///
/// The gas profiler summary element outcome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The `passed` outcome.
    Passed {
        /// The outcome variant.
        variant: PassedVariant,
    },
    /// The `failed` outcome. The call reverted or halted.
    Failed {
        /// The execution error description.
        error: String,
    },
    /// The `invalid` outcome. The contract could not be resolved, deployed, or called.
    Invalid {
        /// The error description.
        error: String,
    },
    /// The `ignored` outcome. An earlier failure skipped the case.
    Ignored,
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn passed(variant: PassedVariant) -> Self {
        Self::Passed { variant }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Failed {
            error: error.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn invalid<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::Invalid {
            error: error.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn ignored() -> Self {
        Self::Ignored
    }
}
