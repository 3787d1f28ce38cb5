//!
//! The profiling run over a list of contracts.
//!

pub mod case;
pub mod description;

use std::sync::Arc;
use std::sync::Mutex;

use crate::artifacts::Registry;
use crate::instance::Instance;
use crate::summary::Summary;
use crate::vm::execution_result::ExecutionError;
use crate::vm::revm::revm_type_conversions::revm_address_to_web3_address;
use crate::vm::revm::REVM;

use self::case::Case;
use self::description::CaseDescription;

///
/// The profiling run over a list of contracts.
///
/// Mirrors a test suite: a `before all` step deploying every contract, then the
/// transaction case, then the estimation case. A failure in a case skips the
/// remaining contracts of that case only. A failure while deploying skips everything.
///
#[derive(Debug, Clone)]
pub struct Profile {
    /// The contract names, in order.
    contracts: Vec<String>,
    /// The profiled method name.
    method: String,
}

impl Profile {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contracts: Vec<String>, method: String) -> Self {
        Self { contracts, method }
    }

    ///
    /// Runs every case, reporting the outcomes to the summary.
    ///
    pub fn run(&self, summary: Arc<Mutex<Summary>>, registry: &Registry, vm: &mut REVM) {
        let instances = match self.deploy(summary.clone(), registry, vm) {
            Some(instances) => instances,
            None => {
                for case in [Case::Transaction, Case::Estimate] {
                    for contract in self.contracts.iter() {
                        Summary::ignored(
                            summary.clone(),
                            CaseDescription::call(case, contract, format!("{}()", self.method)),
                        );
                    }
                }
                return;
            }
        };

        self.run_case(
            summary.clone(),
            Case::Transaction,
            instances.as_slice(),
            vm,
            |instance, vm| {
                let result = instance.send_transaction(vm, self.method.as_str())?;
                Ok(result.gas_used)
            },
        );
        self.run_case(
            summary,
            Case::Estimate,
            instances.as_slice(),
            vm,
            |instance, vm| instance.estimate_gas(vm, self.method.as_str()),
        );
    }

    ///
    /// Deploys every contract, stopping at the first failure.
    ///
    fn deploy(
        &self,
        summary: Arc<Mutex<Summary>>,
        registry: &Registry,
        vm: &mut REVM,
    ) -> Option<Vec<Instance>> {
        let mut instances = Vec::with_capacity(self.contracts.len());
        for (index, contract) in self.contracts.iter().enumerate() {
            let description = CaseDescription::deploy(contract);
            let instance = registry
                .require(contract)
                .and_then(|artifact| Instance::new(vm, artifact));
            match instance {
                Ok(instance) => {
                    Summary::passed_deploy(
                        summary.clone(),
                        description,
                        revm_address_to_web3_address(&instance.address),
                        instance.code_size,
                        instance.deploy_result.gas_used,
                    );
                    instances.push(instance);
                }
                Err(error) => {
                    Summary::invalid(summary.clone(), description, format!("{error:#}"));
                    for contract in self.contracts.iter().skip(index + 1) {
                        Summary::ignored(summary.clone(), CaseDescription::deploy(contract));
                    }
                    return None;
                }
            }
        }
        Some(instances)
    }

    ///
    /// Runs a case over every instance, stopping at the first failure.
    ///
    fn run_case<F>(
        &self,
        summary: Arc<Mutex<Summary>>,
        case: Case,
        instances: &[Instance],
        vm: &mut REVM,
        step: F,
    ) where
        F: Fn(&Instance, &mut REVM) -> anyhow::Result<u64>,
    {
        for (index, instance) in instances.iter().enumerate() {
            let description = CaseDescription::call(
                case,
                instance.artifact.name.as_str(),
                instance.artifact.signature(self.method.as_str()),
            );
            match step(instance, vm) {
                Ok(gas) => match case {
                    Case::Estimate => Summary::passed_estimate(summary.clone(), description, gas),
                    Case::Deploy | Case::Transaction => {
                        Summary::passed_transaction(summary.clone(), description, gas)
                    }
                },
                Err(error) => {
                    let is_executed = error
                        .downcast_ref::<ExecutionError>()
                        .map(ExecutionError::is_executed)
                        .unwrap_or_default();
                    if is_executed {
                        Summary::failed(summary.clone(), description, format!("{error:#}"));
                    } else {
                        Summary::invalid(summary.clone(), description, format!("{error:#}"));
                    }

                    for instance in instances.iter().skip(index + 1) {
                        Summary::ignored(
                            summary.clone(),
                            CaseDescription::call(
                                case,
                                instance.artifact.name.as_str(),
                                instance.artifact.signature(self.method.as_str()),
                            ),
                        );
                    }
                    return;
                }
            }
        }
    }
}
