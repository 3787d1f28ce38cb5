//!
//! The REVM gas estimator.
//!

use revm::primitives::Address;

use crate::vm::execution_result::ExecutionError;

use super::REVM;

impl REVM {
    /// The stipend forwarded with value transfers, added to the optimistic probe.
    pub const CALL_STIPEND: u64 = 2_300;

    ///
    /// Estimates the lowest gas limit the call succeeds with, without committing anything.
    ///
    /// The call is run once at the gas cap. If it fails there, the failure is returned.
    /// Otherwise the limit is bisected between the gas used and the cap, after a single
    /// optimistic probe just above the gas used, which settles most calls without refunds.
    ///
    pub fn estimate_gas(
        &mut self,
        address: Address,
        calldata: &[u8],
    ) -> Result<u64, ExecutionError> {
        let result = self.simulate(address, calldata, self.gas_limit())?;

        let mut low = result.gas_used.saturating_sub(1);
        let mut high = self.gas_limit();

        let optimistic = result
            .gas_used
            .saturating_add(result.gas_refunded)
            .saturating_add(Self::CALL_STIPEND)
            .saturating_mul(64)
            / 63;
        if optimistic < high {
            if self.simulate(address, calldata, optimistic).is_ok() {
                high = optimistic;
            } else {
                low = optimistic;
            }
        }

        while low + 1 < high {
            let middle = low + (high - low) / 2;
            if self.simulate(address, calldata, middle).is_ok() {
                high = middle;
            } else {
                low = middle;
            }
        }

        Ok(high)
    }
}
