//! Typed helpers over the contract's two storage tiers.
//!
//! Instance storage holds the platform singleton (owner, fee config, escrow
//! token, optional oracle, remittance counter) and is TTL-extended as a
//! unit. Persistent storage holds per-remittance data under its own TTL:
//! the remittance record, the insertion-ordered contributor list, one
//! cumulative contribution entry per `(id, contributor)` pair, one pending
//! refund entry per pair left over from a partially-failed or chunked
//! cancellation, and the per-address creator/recipient id indexes.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::Remittance;

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Platform owner (Instance).
    Owner,
    /// Fee destination for every release (Instance).
    FeeCollector,
    /// Platform fee in basis points, always in `[0, 10000]` (Instance).
    PlatformFeeBps,
    /// Token held in escrow custody (Instance).
    EscrowToken,
    /// Advisory price oracle; absent when none configured (Instance).
    Oracle,
    /// Monotonic remittance id counter (Instance).
    RemittanceCounter,
    /// Remittance record keyed by id (Persistent).
    Remittance(u64),
    /// Insertion-ordered contributor addresses for a remittance (Persistent).
    Contributors(u64),
    /// Cumulative contribution for `(remittance, contributor)` (Persistent).
    Contribution(u64, Address),
    /// Refund owed but not yet delivered for `(remittance, contributor)` (Persistent).
    PendingRefund(u64, Address),
    /// Ids created by an address (Persistent).
    UserRemittances(Address),
    /// Ids targeting an address as recipient (Persistent).
    RecipientRemittances(Address),
}

// ── Instance storage ─────────────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_fee_collector(env: &Env, collector: &Address) {
    env.storage().instance().set(&DataKey::FeeCollector, collector);
    bump_instance(env);
}

pub fn get_fee_collector(env: &Env) -> Result<Address, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FeeCollector)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_platform_fee_bps(env: &Env, fee_bps: u32) {
    env.storage().instance().set(&DataKey::PlatformFeeBps, &fee_bps);
    bump_instance(env);
}

pub fn get_platform_fee_bps(env: &Env) -> Result<u32, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PlatformFeeBps)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_escrow_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::EscrowToken, token);
    bump_instance(env);
}

pub fn get_escrow_token(env: &Env) -> Result<Address, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::EscrowToken)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::Oracle, oracle);
    bump_instance(env);
}

/// `None` when no oracle has been configured; the escrow never requires one.
pub fn get_oracle(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Oracle)
}

pub fn set_remittance_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::RemittanceCounter, &counter);
    bump_instance(env);
}

pub fn get_remittance_counter(env: &Env) -> Result<u64, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RemittanceCounter)
        .ok_or(ContractError::NotInitialized)
}

// ── Persistent storage ───────────────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn set_remittance(env: &Env, id: u64, remittance: &Remittance) {
    let key = DataKey::Remittance(id);
    env.storage().persistent().set(&key, remittance);
    bump_persistent(env, &key);
}

pub fn get_remittance(env: &Env, id: u64) -> Result<Remittance, ContractError> {
    let key = DataKey::Remittance(id);
    let remittance = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    bump_persistent(env, &key);
    Ok(remittance)
}

pub fn set_contributors(env: &Env, id: u64, contributors: &Vec<Address>) {
    let key = DataKey::Contributors(id);
    env.storage().persistent().set(&key, contributors);
    bump_persistent(env, &key);
}

pub fn get_contributors(env: &Env, id: u64) -> Vec<Address> {
    let key = DataKey::Contributors(id);
    match env.storage().persistent().get(&key) {
        Some(contributors) => {
            bump_persistent(env, &key);
            contributors
        }
        None => Vec::new(env),
    }
}

pub fn set_contribution(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn get_contribution(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_pending_refund(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::PendingRefund(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn get_pending_refund(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::PendingRefund(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn remove_pending_refund(env: &Env, id: u64, contributor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::PendingRefund(id, contributor.clone()));
}

fn push_index(env: &Env, key: DataKey, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}

fn get_index(env: &Env, key: DataKey) -> Vec<u64> {
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

pub fn push_user_remittance(env: &Env, user: &Address, id: u64) {
    push_index(env, DataKey::UserRemittances(user.clone()), id);
}

pub fn get_user_remittances(env: &Env, user: &Address) -> Vec<u64> {
    get_index(env, DataKey::UserRemittances(user.clone()))
}

pub fn push_recipient_remittance(env: &Env, recipient: &Address, id: u64) {
    push_index(env, DataKey::RecipientRemittances(recipient.clone()), id);
}

pub fn get_recipient_remittances(env: &Env, recipient: &Address) -> Vec<u64> {
    get_index(env, DataKey::RecipientRemittances(recipient.clone()))
}
