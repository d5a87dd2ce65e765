//! Contract events, one per durable record the escrow commits. External
//! indexers reconstruct the full audit trail from these alone, so every
//! value movement (contribution, payout, fee, refund) carries its amount.

use soroban_sdk::{symbol_short, Address, Env, String};

pub fn emit_initialized(env: &Env, owner: &Address, fee_collector: &Address, fee_bps: u32) {
    env.events().publish(
        (symbol_short!("init"),),
        (owner.clone(), fee_collector.clone(), fee_bps),
    );
}

pub fn emit_remittance_created(
    env: &Env,
    id: u64,
    creator: &Address,
    recipient: &Address,
    target_amount: i128,
    purpose: &String,
) {
    env.events().publish(
        (symbol_short!("created"), id),
        (creator.clone(), recipient.clone(), target_amount, purpose.clone()),
    );
}

pub fn emit_contribution(env: &Env, id: u64, contributor: &Address, amount: i128, raised: i128) {
    env.events().publish(
        (symbol_short!("contrib"), id),
        (contributor.clone(), amount, raised),
    );
}

pub fn emit_funds_released(
    env: &Env,
    id: u64,
    recipient: &Address,
    payout: i128,
    fee_collector: &Address,
    fee: i128,
) {
    env.events().publish(
        (symbol_short!("released"), id),
        (recipient.clone(), payout, fee_collector.clone(), fee),
    );
}

pub fn emit_remittance_cancelled(env: &Env, id: u64, cancelled_by: &Address, raised: i128) {
    env.events().publish(
        (symbol_short!("cancelled"), id),
        (cancelled_by.clone(), raised),
    );
}

pub fn emit_refund(env: &Env, id: u64, contributor: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"), id), (contributor.clone(), amount));
}

/// A refund that could not be delivered during cancellation; claimable later.
pub fn emit_refund_pending(env: &Env, id: u64, contributor: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("ref_pend"), id), (contributor.clone(), amount));
}

pub fn emit_refund_claimed(env: &Env, id: u64, contributor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("ref_claim"), id),
        (contributor.clone(), amount),
    );
}

pub fn emit_fee_updated(env: &Env, owner: &Address, old_bps: u32, new_bps: u32) {
    env.events()
        .publish((symbol_short!("fee_upd"),), (owner.clone(), old_bps, new_bps));
}

pub fn emit_fee_collector_updated(env: &Env, owner: &Address, new_collector: &Address) {
    env.events().publish(
        (symbol_short!("fee_coll"),),
        (owner.clone(), new_collector.clone()),
    );
}

pub fn emit_ownership_transferred(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"),),
        (old_owner.clone(), new_owner.clone()),
    );
}

pub fn emit_oracle_set(env: &Env, owner: &Address, oracle: &Address) {
    env.events()
        .publish((symbol_short!("oracle"),), (owner.clone(), oracle.clone()));
}
