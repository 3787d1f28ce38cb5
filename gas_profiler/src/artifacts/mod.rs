//!
//! The compiled contract artifact registry.
//!

pub mod artifact;
pub mod bytecode;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use self::artifact::Artifact;

///
/// The compiled contract artifact registry.
///
/// Resolves contract names to artifact files of a build directory.
///
#[derive(Debug, Clone)]
pub struct Registry {
    /// The build directory.
    directory: PathBuf,
}

impl Registry {
    /// The artifact file extension.
    pub const ARTIFACT_EXTENSION: &'static str = "json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(directory: &Path) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Artifacts directory {directory:?} does not exist");
        }

        Ok(Self {
            directory: directory.to_owned(),
        })
    }

    ///
    /// Resolves and reads the artifact of the named contract.
    ///
    pub fn require(&self, name: &str) -> anyhow::Result<Artifact> {
        let path = self.resolve(name)?;
        let artifact = Artifact::from_file(path.as_path())?;
        if artifact.name != name {
            anyhow::bail!(
                "Artifact {path:?} describes contract `{}` instead of `{name}`",
                artifact.name
            );
        }
        Ok(artifact)
    }

    ///
    /// Returns the path of the only artifact file of the named contract.
    ///
    /// The flat Truffle layout is checked first, then nested Hardhat and Foundry layouts.
    ///
    pub fn resolve(&self, name: &str) -> anyhow::Result<PathBuf> {
        let file_name = format!("{name}.{}", Self::ARTIFACT_EXTENSION);

        let flat = self.directory.join(file_name.as_str());
        if flat.is_file() {
            return Ok(flat);
        }

        let directory = self
            .directory
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Artifacts directory path is not valid UTF-8"))?;
        let pattern = PathBuf::from(glob::Pattern::escape(directory))
            .join("**")
            .join(glob::Pattern::escape(file_name.as_str()));
        let pattern = pattern.to_string_lossy();
        let mut candidates = Vec::with_capacity(1);
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                candidates.push(path);
            }
        }
        candidates.sort();

        match candidates.len() {
            0 => anyhow::bail!(
                "Could not find artifacts for contract `{name}` in {:?}",
                self.directory
            ),
            1 => Ok(candidates.remove(0)),
            _ => anyhow::bail!(
                "Contract `{name}` is ambiguous, found artifacts: {}",
                candidates
                    .iter()
                    .map(|path| path.to_string_lossy().to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}
