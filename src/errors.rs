use soroban_sdk::contracterror;

/// Error codes are part of the contract ABI; existing codes must never be
/// renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidTarget = 3,
    InvalidRecipient = 4,
    NotFound = 5,
    NotActive = 6,
    ZeroAmount = 7,
    TargetNotReached = 8,
    Unauthorized = 9,
    TransferFailed = 10,
    InvalidFeeConfig = 11,
    Overflow = 12,
    PriceUnavailable = 13,
    NoPendingRefund = 14,
}
