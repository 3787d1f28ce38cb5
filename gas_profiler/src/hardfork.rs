//!
//! The EVM hardfork the simulated chain runs on.
//!

///
/// The EVM hardfork the simulated chain runs on.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum Hardfork {
    /// The Shanghai hardfork.
    Shanghai,
    /// The Cancun hardfork.
    Cancun,
    /// The Prague hardfork.
    #[default]
    Prague,
}

impl std::str::FromStr for Hardfork {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "Shanghai" | "shanghai" => Ok(Self::Shanghai),
            "Cancun" | "cancun" => Ok(Self::Cancun),
            "Prague" | "prague" => Ok(Self::Prague),
            string => anyhow::bail!(
                "Unknown hardfork `{}`. Supported hardforks: {:?}",
                string,
                vec![Self::Shanghai, Self::Cancun, Self::Prague]
            ),
        }
    }
}

impl From<Hardfork> for revm::primitives::hardfork::SpecId {
    fn from(hardfork: Hardfork) -> Self {
        match hardfork {
            Hardfork::Shanghai => revm::primitives::hardfork::SpecId::SHANGHAI,
            Hardfork::Cancun => revm::primitives::hardfork::SpecId::CANCUN,
            Hardfork::Prague => revm::primitives::hardfork::SpecId::PRAGUE,
        }
    }
}

impl std::fmt::Display for Hardfork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shanghai => write!(f, "Shanghai"),
            Self::Cancun => write!(f, "Cancun"),
            Self::Prague => write!(f, "Prague"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Hardfork;

    #[test]
    fn parses_both_spellings() {
        assert_eq!(Hardfork::from_str("Cancun").unwrap(), Hardfork::Cancun);
        assert_eq!(Hardfork::from_str("prague").unwrap(), Hardfork::Prague);
    }

    #[test]
    fn rejects_unknown() {
        let error = Hardfork::from_str("Frontier").unwrap_err();
        assert!(error.to_string().contains("Unknown hardfork `Frontier`"));
    }

    #[test]
    fn maps_to_spec_id() {
        let spec: revm::primitives::hardfork::SpecId = Hardfork::default().into();
        assert_eq!(spec, revm::primitives::hardfork::SpecId::PRAGUE);
    }
}
