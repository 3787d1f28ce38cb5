//!
//! The compiled contract artifact.
//!

use std::path::Path;

use anyhow::Context;

use super::bytecode::Bytecode;

///
/// The artifact file layout shared by Truffle, Hardhat, and Foundry.
///
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    /// The contract name, absent in Foundry artifacts.
    #[serde(default)]
    contract_name: Option<String>,
    /// The contract ABI.
    abi: web3::ethabi::Contract,
    /// The creation bytecode.
    #[serde(default)]
    bytecode: Bytecode,
    /// The runtime bytecode.
    #[serde(default)]
    deployed_bytecode: Bytecode,
}

///
/// The compiled contract artifact.
///
#[derive(Debug, Clone)]
pub struct Artifact {
    /// The contract name.
    pub name: String,
    /// The contract ABI.
    pub abi: web3::ethabi::Contract,
    /// The creation bytecode.
    pub bytecode: Vec<u8>,
    /// The runtime bytecode.
    pub deployed_bytecode: Vec<u8>,
}

impl Artifact {
    ///
    /// Reads the artifact from a JSON file, naming it after the file stem if the file does not.
    ///
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Artifact file {path:?} reading"))?;
        let fallback_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        Self::from_json(fallback_name, data.as_str())
            .with_context(|| format!("Artifact file {path:?} parsing"))
    }

    ///
    /// Parses the artifact from its JSON representation.
    ///
    pub fn from_json(fallback_name: &str, data: &str) -> anyhow::Result<Self> {
        let file: ArtifactFile = serde_json::from_str(data)?;
        let name = file
            .contract_name
            .unwrap_or_else(|| fallback_name.to_owned());
        let bytecode = file
            .bytecode
            .decode()
            .with_context(|| format!("Contract `{name}` creation bytecode"))?;
        let deployed_bytecode = file
            .deployed_bytecode
            .decode()
            .with_context(|| format!("Contract `{name}` runtime bytecode"))?;

        Ok(Self {
            name,
            abi: file.abi,
            bytecode,
            deployed_bytecode,
        })
    }

    ///
    /// Returns the creation code for a deployment without constructor arguments.
    ///
    pub fn deploy_code(&self) -> anyhow::Result<Vec<u8>> {
        if self.bytecode.is_empty() {
            anyhow::bail!(
                "Contract `{}` has no creation bytecode and cannot be deployed; it is an interface or an abstract contract",
                self.name
            );
        }
        if let Some(constructor) = self.abi.constructor.as_ref() {
            if !constructor.inputs.is_empty() {
                anyhow::bail!(
                    "Contract `{}` constructor expects {} arguments, but none are supplied",
                    self.name,
                    constructor.inputs.len()
                );
            }
        }

        Ok(self.bytecode.clone())
    }

    ///
    /// Returns the ABI function with the specified name.
    ///
    pub fn method(&self, name: &str) -> anyhow::Result<&web3::ethabi::Function> {
        let overloads = self
            .abi
            .functions_by_name(name)
            .map_err(|_| anyhow::anyhow!("Contract `{}` has no method `{name}`", self.name))?;
        match overloads.as_slice() {
            [function] => Ok(function),
            overloads => anyhow::bail!(
                "Contract `{}` method `{name}` is overloaded: {}",
                self.name,
                overloads
                    .iter()
                    .map(|function| function.signature())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }

    ///
    /// Returns the `method(arguments)` signature of a method.
    ///
    /// Falls back to `method()` for methods missing from the ABI, which fail when called anyway.
    ///
    pub fn signature(&self, name: &str) -> String {
        self.method(name)
            .map(|function| {
                let inputs: Vec<String> = function
                    .inputs
                    .iter()
                    .map(|input| input.kind.to_string())
                    .collect();
                format!("{}({})", function.name, inputs.join(","))
            })
            .unwrap_or_else(|_| format!("{name}()"))
    }

    ///
    /// Encodes a call to the specified method taking no arguments.
    ///
    pub fn calldata(&self, name: &str) -> anyhow::Result<Vec<u8>> {
        let function = self.method(name)?;
        if !function.inputs.is_empty() {
            anyhow::bail!(
                "Contract `{}` method `{}` expects {} arguments, but none are supplied",
                self.name,
                function.signature(),
                function.inputs.len()
            );
        }

        function
            .encode_input(&[])
            .map_err(|error| anyhow::anyhow!("Method `{name}` calldata encoding: {error}"))
    }
}
