//!
//! The REVM adapter.
//!

pub mod gas_estimator;
pub mod revm_type_conversions;


use revm::{
    context::{BlockEnv, CfgEnv, Context, ContextTr, TxEnv},
    database::InMemoryDB,
    handler::{ExecuteCommitEvm, ExecuteEvm, MainBuilder, MainContext, MainnetContext, MainnetEvm},
    primitives::{hardfork::SpecId, Address, Bytes, TxKind, U256},
    state::AccountInfo,
    Database,
};

use crate::config::Config;
use crate::vm::execution_result::ExecutionError;
use crate::vm::execution_result::ExecutionResult;

use self::revm_type_conversions::web3_address_to_revm_address;

///
/// REVM instance with its internal state.
///
/// Every instance is an isolated chain: a fresh in-memory database with a single funded caller.
///
#[allow(clippy::upper_case_acronyms)]
pub struct REVM {
    /// REVM internal state.
    evm: MainnetEvm<MainnetContext<InMemoryDB>>,
    /// The transactions sender.
    caller: Address,
    /// The block gas limit, which caps transactions and estimations.
    gas_limit: u64,
}

impl REVM {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &Config) -> Self {
        let caller = web3_address_to_revm_address(&config.caller);

        let mut database = InMemoryDB::default();
        database.insert_account_info(
            caller,
            AccountInfo {
                balance: U256::from(config.caller_balance),
                ..Default::default()
            },
        );

        let spec: SpecId = config.hardfork.into();
        let mut cfg = CfgEnv::new_with_spec(spec);
        cfg.disable_nonce_check = true;

        let block = BlockEnv {
            gas_limit: config.gas_limit,
            ..Default::default()
        };

        let evm = Context::mainnet()
            .with_db(database)
            .with_cfg(cfg)
            .with_block(block)
            .build_mainnet();

        Self {
            evm,
            caller,
            gas_limit: config.gas_limit,
        }
    }

    ///
    /// Runs and commits a deploy transaction.
    ///
    /// The created address is always set in the returned result.
    ///
    pub fn deploy(&mut self, init_code: Vec<u8>) -> Result<ExecutionResult, ExecutionError> {
        let transaction = self.new_transaction(TxKind::Create, init_code, self.gas_limit)?;
        let result = self
            .evm
            .transact_commit(transaction)
            .map_err(|error| ExecutionError::Rejected(error.to_string()))?;

        let result = ExecutionResult::try_from(result)?;
        if result.address.is_none() {
            return Err(ExecutionError::UnexpectedOutput(
                "deployment returned no contract address".to_owned(),
            ));
        }
        Ok(result)
    }

    ///
    /// Runs and commits a runtime transaction.
    ///
    pub fn transact(
        &mut self,
        address: Address,
        calldata: &[u8],
    ) -> Result<ExecutionResult, ExecutionError> {
        let transaction =
            self.new_transaction(TxKind::Call(address), calldata.to_vec(), self.gas_limit)?;
        let result = self
            .evm
            .transact_commit(transaction)
            .map_err(|error| ExecutionError::Rejected(error.to_string()))?;

        ExecutionResult::try_from(result)
    }

    ///
    /// Runs a runtime transaction with the specified gas limit and discards its state changes.
    ///
    pub fn simulate(
        &mut self,
        address: Address,
        calldata: &[u8],
        gas_limit: u64,
    ) -> Result<ExecutionResult, ExecutionError> {
        let transaction =
            self.new_transaction(TxKind::Call(address), calldata.to_vec(), gas_limit)?;
        let result = self
            .evm
            .transact(transaction)
            .map_err(|error| ExecutionError::Rejected(error.to_string()))?;

        ExecutionResult::try_from(result.result)
    }

    ///
    /// Reads a committed storage slot.
    ///
    pub fn storage(&mut self, address: Address, slot: U256) -> anyhow::Result<U256> {
        self.evm
            .ctx
            .db_mut()
            .storage(address, slot)
            .map_err(|error| anyhow::anyhow!("Storage slot {slot} of {address} reading: {error:?}"))
    }

    ///
    /// Reads the committed runtime code of an account.
    ///
    pub fn code(&mut self, address: Address) -> anyhow::Result<Vec<u8>> {
        let account = self
            .evm
            .ctx
            .db_mut()
            .basic(address)
            .map_err(|error| anyhow::anyhow!("Account {address} reading: {error:?}"))?;
        Ok(account
            .and_then(|account| account.code)
            .map(|code| code.original_bytes().to_vec())
            .unwrap_or_default())
    }

    ///
    /// Returns the gas limit capping transactions and estimations.
    ///
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    ///
    /// Fills a transaction from the caller with zero value and gas price.
    ///
    fn new_transaction(
        &self,
        kind: TxKind,
        data: Vec<u8>,
        gas_limit: u64,
    ) -> Result<TxEnv, ExecutionError> {
        TxEnv::builder()
            .caller(self.caller)
            .gas_limit(gas_limit)
            .gas_price(0)
            .kind(kind)
            .value(U256::ZERO)
            .data(Bytes::from(data))
            .build()
            .map_err(|error| ExecutionError::Rejected(format!("{error:?}")))
    }
}
