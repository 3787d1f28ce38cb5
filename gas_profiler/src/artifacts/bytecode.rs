//!
//! The artifact bytecode field.
//!

///
/// The artifact bytecode field.
///
/// Truffle and Hardhat store a plain hex string, Foundry wraps it into an object.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum Bytecode {
    /// The Truffle and Hardhat layout.
    Hex(String),
    /// The Foundry layout.
    Object {
        /// The hex bytecode.
        object: String,
    },
}

impl Bytecode {
    /// The prefix of unlinked library placeholders.
    pub const LIBRARY_PLACEHOLDER: &'static str = "__";

    ///
    /// Decodes the hex representation.
    ///
    pub fn decode(&self) -> anyhow::Result<Vec<u8>> {
        let hex = match self {
            Self::Hex(hex) => hex.as_str(),
            Self::Object { object } => object.as_str(),
        };
        let hex = hex.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);

        if let Some(position) = hex.find(Self::LIBRARY_PLACEHOLDER) {
            let placeholder: String = hex[position..].chars().take(40).collect();
            anyhow::bail!("Bytecode contains unlinked library placeholder `{placeholder}`");
        }

        hex::decode(hex).map_err(|error| anyhow::anyhow!("Invalid bytecode hex value: {error}"))
    }
}

impl Default for Bytecode {
    fn default() -> Self {
        Self::Hex(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::Bytecode;

    #[test]
    fn plain_and_object_layouts() {
        let plain: Bytecode = serde_json::from_str(r#""0x6000""#).expect("Valid JSON");
        let object: Bytecode = serde_json::from_str(r#"{ "object": "0x6001" }"#).expect("Valid JSON");

        assert_eq!(plain.decode().expect("Valid hex"), vec![0x60, 0x00]);
        assert_eq!(object.decode().expect("Valid hex"), vec![0x60, 0x01]);
    }

    #[test]
    fn prefix_is_optional() {
        let bytecode = Bytecode::Hex("fe".to_owned());
        assert_eq!(bytecode.decode().expect("Valid hex"), vec![0xfe]);
    }

    #[test]
    fn unlinked_library_is_rejected() {
        let bytecode =
            Bytecode::Hex("0x73__$a9d4e1d7f0de9e5a3a5d8bcd29d1e6a5f2$__3014".to_owned());
        let error = bytecode.decode().unwrap_err();
        assert!(error.to_string().contains("unlinked library placeholder"));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let bytecode = Bytecode::Hex("0x60zz".to_owned());
        assert!(bytecode.decode().is_err());
    }
}
