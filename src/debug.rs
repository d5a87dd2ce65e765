//! Host-log diagnostics, compiled in only with the `debug-log` feature.
//! These never replace events; they exist for local test runs and the
//! `release-with-logs` profile.

#![allow(unused_variables)]

use soroban_sdk::{Address, Env};

#[cfg(feature = "debug-log")]
use soroban_sdk::log;

pub fn log_initialize(env: &Env, owner: &Address, fee_collector: &Address, fee_bps: u32) {
    #[cfg(feature = "debug-log")]
    log!(env, "initialize: fee_bps={}", fee_bps);
}

pub fn log_create_remittance(env: &Env, id: u64, target_amount: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "create_remittance: id={} target={}", id, target_amount);
}

pub fn log_contribute(env: &Env, id: u64, amount: i128, raised: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "contribute: id={} amount={} raised={}", id, amount, raised);
}

pub fn log_release_funds(env: &Env, id: u64, payout: i128, fee: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "release_funds: id={} payout={} fee={}", id, payout, fee);
}

pub fn log_cancel_remittance(env: &Env, id: u64, refunded: u32, pending: u32) {
    #[cfg(feature = "debug-log")]
    log!(
        env,
        "cancel_remittance: id={} refunded={} pending={}",
        id,
        refunded,
        pending
    );
}

pub fn log_claim_refund(env: &Env, id: u64, amount: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "claim_refund: id={} amount={}", id, amount);
}

pub fn log_update_fee(env: &Env, fee_bps: u32) {
    #[cfg(feature = "debug-log")]
    log!(env, "set_platform_fee_bps: {}", fee_bps);
}
