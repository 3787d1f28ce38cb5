//!
//! The deployed contract instance.
//!

use anyhow::Context;

use crate::artifacts::artifact::Artifact;
use crate::vm::execution_result::ExecutionResult;
use crate::vm::revm::REVM;

///
/// The deployed contract instance.
///
#[derive(Debug, Clone)]
pub struct Instance {
    /// The contract artifact.
    pub artifact: Artifact,
    /// The instance address.
    pub address: revm::primitives::Address,
    /// The deploy transaction result.
    pub deploy_result: ExecutionResult,
    /// The runtime code size stored on chain.
    pub code_size: usize,
}

impl Instance {
    ///
    /// Deploys a new instance of the artifact without constructor arguments.
    ///
    pub fn new(vm: &mut REVM, artifact: Artifact) -> anyhow::Result<Self> {
        let deploy_code = artifact.deploy_code()?;
        let deploy_result = vm
            .deploy(deploy_code)
            .with_context(|| format!("Contract `{}` deployment", artifact.name))?;
        let address = deploy_result
            .address
            .ok_or_else(|| anyhow::anyhow!("Contract `{}` has no address", artifact.name))?;
        let code_size = vm.code(address)?.len();

        Ok(Self {
            artifact,
            address,
            deploy_result,
            code_size,
        })
    }

    ///
    /// Calls the method as a committed transaction.
    ///
    pub fn send_transaction(
        &self,
        vm: &mut REVM,
        method: &str,
    ) -> anyhow::Result<ExecutionResult> {
        let calldata = self.artifact.calldata(method)?;
        let result = vm.transact(self.address, calldata.as_slice())?;
        Ok(result)
    }

    ///
    /// Estimates the gas of calling the method, leaving the state untouched.
    ///
    pub fn estimate_gas(&self, vm: &mut REVM, method: &str) -> anyhow::Result<u64> {
        let calldata = self.artifact.calldata(method)?;
        let estimate = vm.estimate_gas(self.address, calldata.as_slice())?;
        Ok(estimate)
    }
}
