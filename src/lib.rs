#![no_std]
mod debug;
mod errors;
mod events;
mod oracle;
mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use debug::*;
pub use errors::ContractError;
pub use events::*;
pub use oracle::{PriceFeed, PriceFeedClient};
pub use storage::*;
pub use types::*;
pub use validation::*;

/// Upper bound on push-refund transfers attempted in one `cancel_remittance`
/// call. Contributors past the cap receive a pending refund record and use
/// `claim_refund`, so per-call cross-contract work stays bounded.
pub const MAX_REFUNDS_PER_CALL: u32 = 25;

const BPS_DENOMINATOR: i128 = 10_000;
const MAX_FEE_BPS: u32 = 10_000;

#[contract]
pub struct RemitEscrowContract;

fn transfer_from_escrow(env: &Env, token: &Address, to: &Address, amount: i128) -> bool {
    let client = token::Client::new(env, token);
    matches!(
        client.try_transfer(&env.current_contract_address(), to, &amount),
        Ok(Ok(()))
    )
}

#[contractimpl]
impl RemitEscrowContract {
    /// One-shot deployment configuration: platform owner, fee destination,
    /// escrow token, fee in basis points, and an optional price oracle.
    pub fn initialize(
        env: Env,
        owner: Address,
        fee_collector: Address,
        escrow_token: Address,
        fee_bps: u32,
        price_oracle: Option<Address>,
    ) -> Result<(), ContractError> {
        if has_owner(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        if fee_bps > MAX_FEE_BPS {
            return Err(ContractError::InvalidFeeConfig);
        }

        validate_payout_address(&env, &fee_collector)?;

        set_owner(&env, &owner);
        set_fee_collector(&env, &fee_collector);
        set_escrow_token(&env, &escrow_token);
        set_platform_fee_bps(&env, fee_bps);
        set_remittance_counter(&env, 0);

        if let Some(oracle) = price_oracle {
            set_oracle(&env, &oracle);
        }

        emit_initialized(&env, &owner, &fee_collector, fee_bps);

        log_initialize(&env, &owner, &fee_collector, fee_bps);

        Ok(())
    }

    /// Open a new remittance targeting `recipient` for `target_amount`.
    /// Returns the freshly assigned id (ids start at 1).
    pub fn create_remittance(
        env: Env,
        creator: Address,
        recipient: Address,
        target_amount: i128,
        purpose: String,
    ) -> Result<u64, ContractError> {
        creator.require_auth();

        if target_amount <= 0 {
            return Err(ContractError::InvalidTarget);
        }

        validate_payout_address(&env, &recipient)?;

        let counter = get_remittance_counter(&env)?;
        let remittance_id = counter.checked_add(1).ok_or(ContractError::Overflow)?;

        let remittance = Remittance {
            id: remittance_id,
            creator: creator.clone(),
            recipient: recipient.clone(),
            target_amount,
            raised_amount: 0,
            purpose: purpose.clone(),
            status: RemittanceStatus::Active,
            created_at: env.ledger().timestamp(),
        };

        set_remittance(&env, remittance_id, &remittance);
        set_remittance_counter(&env, remittance_id);
        push_user_remittance(&env, &creator, remittance_id);
        push_recipient_remittance(&env, &recipient, remittance_id);

        emit_remittance_created(&env, remittance_id, &creator, &recipient, target_amount, &purpose);

        log_create_remittance(&env, remittance_id, target_amount);

        Ok(remittance_id)
    }

    /// Contribute `amount` of the escrow token to an active remittance.
    /// Repeat contributions from the same address accumulate into one
    /// record. Overfunding past the target is accepted.
    pub fn contribute(
        env: Env,
        remittance_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }

        // Status is checked at execution time; a contribution submitted
        // against an Active remittance still fails here if a release or
        // cancellation committed first.
        let mut remittance = get_remittance(&env, remittance_id)?;
        if remittance.status.is_terminal() {
            return Err(ContractError::NotActive);
        }

        let escrow_token = get_escrow_token(&env)?;
        let token_client = token::Client::new(&env, &escrow_token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        remittance.raised_amount = remittance
            .raised_amount
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        let previous = get_contribution(&env, remittance_id, &contributor);
        if previous == 0 {
            let mut contributors = get_contributors(&env, remittance_id);
            contributors.push_back(contributor.clone());
            set_contributors(&env, remittance_id, &contributors);
        }
        let total = previous.checked_add(amount).ok_or(ContractError::Overflow)?;
        set_contribution(&env, remittance_id, &contributor, total);
        set_remittance(&env, remittance_id, &remittance);

        emit_contribution(&env, remittance_id, &contributor, amount, remittance.raised_amount);

        log_contribute(&env, remittance_id, amount, remittance.raised_amount);

        Ok(())
    }

    /// Disburse a funded remittance: payout to the recipient, fee to the
    /// fee collector. Only the recipient or the creator may trigger it,
    /// and only once `raised_amount` has met the target.
    pub fn release_funds(env: Env, remittance_id: u64, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let mut remittance = get_remittance(&env, remittance_id)?;

        if caller != remittance.recipient && caller != remittance.creator {
            return Err(ContractError::Unauthorized);
        }

        if remittance.status.is_terminal() {
            return Err(ContractError::NotActive);
        }

        if remittance.raised_amount < remittance.target_amount {
            return Err(ContractError::TargetNotReached);
        }

        let fee_bps = get_platform_fee_bps(&env)?;
        let fee = remittance
            .raised_amount
            .checked_mul(fee_bps as i128)
            .ok_or(ContractError::Overflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(ContractError::Overflow)?;
        let payout = remittance
            .raised_amount
            .checked_sub(fee)
            .ok_or(ContractError::Overflow)?;

        // Checks-effects-interactions: the terminal status is written
        // before either transfer. A TransferFailed return reverts the
        // whole invocation, so on failure the remittance stays Active.
        remittance.status = RemittanceStatus::Released;
        set_remittance(&env, remittance_id, &remittance);

        let escrow_token = get_escrow_token(&env)?;
        if !transfer_from_escrow(&env, &escrow_token, &remittance.recipient, payout) {
            return Err(ContractError::TransferFailed);
        }

        let fee_collector = get_fee_collector(&env)?;
        if fee > 0 && !transfer_from_escrow(&env, &escrow_token, &fee_collector, fee) {
            return Err(ContractError::TransferFailed);
        }

        emit_funds_released(&env, remittance_id, &remittance.recipient, payout, &fee_collector, fee);

        log_release_funds(&env, remittance_id, payout, fee);

        Ok(())
    }

    /// Cancel an active remittance and refund contributors in insertion
    /// order. The status transition always commits; an individual refund
    /// the destination rejects, or one past the per-call cap, degrades to
    /// a pending refund record instead of aborting the cancellation.
    pub fn cancel_remittance(
        env: Env,
        remittance_id: u64,
        caller: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut remittance = get_remittance(&env, remittance_id)?;
        let owner = get_owner(&env)?;

        if caller != remittance.creator && caller != owner {
            return Err(ContractError::Unauthorized);
        }

        if remittance.status.is_terminal() {
            return Err(ContractError::NotActive);
        }

        remittance.status = RemittanceStatus::Cancelled;
        set_remittance(&env, remittance_id, &remittance);

        emit_remittance_cancelled(&env, remittance_id, &caller, remittance.raised_amount);

        let escrow_token = get_escrow_token(&env)?;
        let contributors = get_contributors(&env, remittance_id);
        let mut refunded: u32 = 0;
        let mut pending: u32 = 0;

        for contributor in contributors.iter() {
            let amount = get_contribution(&env, remittance_id, &contributor);
            if amount == 0 {
                continue;
            }

            set_contribution(&env, remittance_id, &contributor, 0);
            remittance.raised_amount = remittance
                .raised_amount
                .checked_sub(amount)
                .ok_or(ContractError::Overflow)?;

            if refunded < MAX_REFUNDS_PER_CALL
                && transfer_from_escrow(&env, &escrow_token, &contributor, amount)
            {
                refunded += 1;
                emit_refund(&env, remittance_id, &contributor, amount);
            } else {
                set_pending_refund(&env, remittance_id, &contributor, amount);
                pending += 1;
                emit_refund_pending(&env, remittance_id, &contributor, amount);
            }
        }

        set_remittance(&env, remittance_id, &remittance);

        log_cancel_remittance(&env, remittance_id, refunded, pending);

        Ok(())
    }

    /// Pull-based fallback for refunds that could not be delivered during
    /// cancellation. Transfers exactly the recorded pending amount.
    pub fn claim_refund(
        env: Env,
        remittance_id: u64,
        contributor: Address,
    ) -> Result<(), ContractError> {
        contributor.require_auth();

        // NotFound for an unknown id, independent of any pending record.
        get_remittance(&env, remittance_id)?;

        let amount = get_pending_refund(&env, remittance_id, &contributor);
        if amount == 0 {
            return Err(ContractError::NoPendingRefund);
        }

        // Remove the obligation before transferring; the error return on a
        // failed transfer reverts the removal along with everything else.
        remove_pending_refund(&env, remittance_id, &contributor);

        let escrow_token = get_escrow_token(&env)?;
        if !transfer_from_escrow(&env, &escrow_token, &contributor, amount) {
            return Err(ContractError::TransferFailed);
        }

        emit_refund_claimed(&env, remittance_id, &contributor, amount);

        log_claim_refund(&env, remittance_id, amount);

        Ok(())
    }

    // ── Platform admin ───────────────────────────────────────────────

    pub fn set_platform_fee_bps(env: Env, fee_bps: u32) -> Result<(), ContractError> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        if fee_bps > MAX_FEE_BPS {
            return Err(ContractError::InvalidFeeConfig);
        }

        let old_bps = get_platform_fee_bps(&env)?;
        set_platform_fee_bps(&env, fee_bps);
        emit_fee_updated(&env, &owner, old_bps, fee_bps);

        log_update_fee(&env, fee_bps);

        Ok(())
    }

    pub fn set_fee_collector(env: Env, new_collector: Address) -> Result<(), ContractError> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        validate_payout_address(&env, &new_collector)?;

        set_fee_collector(&env, &new_collector);
        emit_fee_collector_updated(&env, &owner, &new_collector);

        Ok(())
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ContractError> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        set_owner(&env, &new_owner);
        emit_ownership_transferred(&env, &owner, &new_owner);

        Ok(())
    }

    pub fn set_oracle(env: Env, oracle: Address) -> Result<(), ContractError> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        set_oracle(&env, &oracle);
        emit_oracle_set(&env, &owner, &oracle);

        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get_remittance(env: Env, remittance_id: u64) -> Result<Remittance, ContractError> {
        get_remittance(&env, remittance_id)
    }

    /// Cumulative live contribution for `(remittance, contributor)`; zero
    /// once refunded or if the address never contributed.
    pub fn get_contribution(
        env: Env,
        remittance_id: u64,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        get_remittance(&env, remittance_id)?;
        Ok(get_contribution(&env, remittance_id, &contributor))
    }

    pub fn get_contributors(env: Env, remittance_id: u64) -> Result<Vec<Address>, ContractError> {
        get_remittance(&env, remittance_id)?;
        Ok(get_contributors(&env, remittance_id))
    }

    pub fn get_pending_refund(
        env: Env,
        remittance_id: u64,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        get_remittance(&env, remittance_id)?;
        Ok(get_pending_refund(&env, remittance_id, &contributor))
    }

    pub fn get_total_remittances(env: Env) -> Result<u64, ContractError> {
        get_remittance_counter(&env)
    }

    pub fn get_user_remittances(env: Env, user: Address) -> Vec<u64> {
        get_user_remittances(&env, &user)
    }

    pub fn get_recipient_remittances(env: Env, recipient: Address) -> Vec<u64> {
        get_recipient_remittances(&env, &recipient)
    }

    pub fn get_platform_fee_bps(env: Env) -> Result<u32, ContractError> {
        get_platform_fee_bps(&env)
    }

    pub fn get_fee_collector(env: Env) -> Result<Address, ContractError> {
        get_fee_collector(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        get_owner(&env)
    }

    /// Advisory exchange rate from the configured oracle. Unset oracles and
    /// failing feed calls both surface as `PriceUnavailable`; escrow
    /// operations never depend on this read.
    pub fn get_current_price(env: Env) -> Result<i128, ContractError> {
        let oracle = get_oracle(&env).ok_or(ContractError::PriceUnavailable)?;
        let client = PriceFeedClient::new(&env, &oracle);
        match client.try_latest_price() {
            Ok(Ok(price)) => Ok(price),
            _ => Err(ContractError::PriceUnavailable),
        }
    }
}
