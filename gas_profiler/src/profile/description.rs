//!
//! The profiling case description.
//!

use crate::profile::case::Case;

///
/// The profiling case description, locating a case run on a single contract.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDescription {
    /// The case.
    pub case: Case,
    /// The contract name.
    pub contract: String,
    /// The called method signature, e.g. `profile()`. Unset for deployments.
    pub method: Option<String>,
}

impl CaseDescription {
    ///
    /// Describes the deployment of a contract.
    ///
    pub fn deploy(contract: &str) -> Self {
        Self {
            case: Case::Deploy,
            contract: contract.to_owned(),
            method: None,
        }
    }

    ///
    /// Describes a method call on a contract.
    ///
    pub fn call(case: Case, contract: &str, signature: String) -> Self {
        Self {
            case,
            contract: contract.to_owned(),
            method: Some(signature),
        }
    }
}

impl std::fmt::Display for CaseDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.contract)?;
        if let Some(method) = self.method.as_ref() {
            write!(f, "#{method}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CaseDescription;
    use crate::profile::case::Case;

    #[test]
    fn call_selector() {
        let description = CaseDescription::call(Case::Estimate, "A", "profile()".to_owned());
        assert_eq!(description.to_string(), "A#profile()");
    }

    #[test]
    fn deploy_selector() {
        assert_eq!(CaseDescription::deploy("B").to_string(), "B");
    }
}
