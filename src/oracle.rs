//! Advisory price feed interface. The escrow consumes at most one number
//! from it, for display-layer conversion; no invariant depends on the
//! answer, and an unset or failing oracle only surfaces through
//! `get_current_price`.

use soroban_sdk::{contractclient, Env};

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Current exchange rate in the feed's own fixed-point convention.
    fn latest_price(env: Env) -> i128;
}
