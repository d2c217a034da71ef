use alloy_primitives::{address, Address, U256};
use alloy_sol_types::{sol, SolCall};

use crate::session::ContractCall;

/// Bridge contract the deposit form calls by default
pub const DEFAULT_DEPOSIT_CONTRACT: Address = address!("0x54e0bc34D8F4597dba4974Aa6554c959448919A4");

pub const DEPOSIT_FUNCTION: &str = "deposit";

sol! {
    interface ILibertyBridge {
        function deposit(address to) external payable;
    }
}

/// Builds the `deposit(to)` call with `value` attached.
pub fn deposit_call(contract: Address, to: Address, value: U256) -> ContractCall {
    let input = ILibertyBridge::depositCall { to }.abi_encode();

    ContractCall {
        contract,
        function: DEPOSIT_FUNCTION,
        input: input.into(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_call_encoding() {
        let to = address!("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb");
        let call = deposit_call(DEFAULT_DEPOSIT_CONTRACT, to, U256::from(7u64));

        assert_eq!(ILibertyBridge::depositCall::SIGNATURE, "deposit(address)");
        assert_eq!(call.function, DEPOSIT_FUNCTION);
        assert_eq!(call.value, U256::from(7u64));
        assert_eq!(call.input.len(), 4 + 32);
        assert_eq!(call.input[..4], ILibertyBridge::depositCall::SELECTOR);
        // address is left padded into the single argument word
        assert_eq!(&call.input[16..], to.as_slice());
    }
}
