use soroban_sdk::{Address, Env};

use crate::errors::ContractError;

/// Reject the contract's own address as a payout destination. Soroban has
/// no null address; value released to the contract itself would be stuck
/// in custody with no operation able to move it again.
pub fn validate_payout_address(env: &Env, address: &Address) -> Result<(), ContractError> {
    if *address == env.current_contract_address() {
        return Err(ContractError::InvalidRecipient);
    }
    Ok(())
}
