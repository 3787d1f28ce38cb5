//!
//! The gas profiler summary element.
//!

pub mod outcome;

use colored::Colorize;

use crate::profile::description::CaseDescription;

use self::outcome::passed_variant::PassedVariant;
use self::outcome::Outcome;

///
/// The gas profiler summary element.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The case run on a single contract.
    pub description: CaseDescription,
    /// The case outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(description: CaseDescription, outcome: Outcome) -> Self {
        Self {
            description,
            outcome,
        }
    }

    ///
    /// Prints the element.
    ///
    /// Estimates are always printed as `Name#method() <gas>`, uncolored.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        if let Outcome::Passed {
            variant: PassedVariant::Estimate { gas },
        } = self.outcome
        {
            return Some(format!("{} {gas}", self.description));
        }

        match self.outcome {
            Outcome::Passed { .. } if !verbosity => return None,
            Outcome::Ignored if !verbosity => return None,
            _ => {}
        }

        let outcome = match self.outcome {
            Outcome::Passed { .. } => "PASSED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
            Outcome::Invalid { .. } => "INVALID".red(),
            Outcome::Ignored => "IGNORED".bright_black(),
        };

        let details = match self.outcome {
            Outcome::Passed {
                variant:
                    PassedVariant::Deploy {
                        address,
                        size,
                        gas_used,
                    },
            } => format!("(address {address:?}, size {size}, gas used {gas_used})")
                .bright_white()
                .to_string(),
            Outcome::Passed {
                variant: PassedVariant::Transaction { gas_used },
            } => format!("(gas used {gas_used})").bright_white().to_string(),
            Outcome::Failed { ref error } => error.to_owned(),
            Outcome::Invalid { ref error } => error.to_owned(),
            _ => String::new(),
        };

        Some(format!(
            "{:>18} {:>7} {} {}",
            self.description.case.to_string().bright_white(),
            outcome,
            self.description,
            details
        ))
    }
}
