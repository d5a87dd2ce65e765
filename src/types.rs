use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a remittance. `Active` is the only state that accepts
/// contributions; `Released` and `Cancelled` are terminal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemittanceStatus {
    Active,
    Released,
    Cancelled,
}

impl RemittanceStatus {
    pub fn is_terminal(&self) -> bool {
        match self {
            RemittanceStatus::Active => false,
            RemittanceStatus::Released | RemittanceStatus::Cancelled => true,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Remittance {
    pub id: u64,
    pub creator: Address,
    pub recipient: Address,
    pub target_amount: i128,
    /// Sum of all live (non-refunded) contributions. Only `contribute`
    /// increments it; only refund processing decrements it.
    pub raised_amount: i128,
    pub purpose: String,
    pub status: RemittanceStatus,
    pub created_at: u64,
}
