//!
//! The conversions between `web3` and REVM types.
//!

pub fn web3_address_to_revm_address(address: &web3::types::Address) -> revm::primitives::Address {
    revm::primitives::Address::from_slice(address.as_bytes())
}

pub fn revm_address_to_web3_address(address: &revm::primitives::Address) -> web3::types::Address {
    web3::types::Address::from_slice(address.as_slice())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::revm_address_to_web3_address;
    use super::web3_address_to_revm_address;

    #[test]
    fn address_keeps_bytes() {
        let web3_address =
            web3::types::Address::from_str("627306090abab3a6e1400e9345bc60c78a8bef57")
                .expect("Always valid");
        let revm_address = web3_address_to_revm_address(&web3_address);

        assert_eq!(revm_address.as_slice(), web3_address.as_bytes());
        assert_eq!(revm_address_to_web3_address(&revm_address), web3_address);
    }
}
