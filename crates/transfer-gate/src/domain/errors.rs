//! Gate error types.
//!
//! Every rejection is synchronous and non-retryable: the failed call leaves
//! gate state exactly as it was. The caller decides whether to retry.

use super::entities::{Address, Amount, Ordinal, TransferSide};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Transfer of {amount} exceeds max transfer amount {max}")]
    TransferTooLarge { amount: Amount, max: Amount },

    #[error("Cooldown not elapsed for {side:?} account {account:?}")]
    CooldownNotElapsed { side: TransferSide, account: Address },

    #[error("Wallet limit exceeded for {account:?}: holding {balance} + {amount} > limit {limit}")]
    WalletLimitExceeded {
        account: Address,
        balance: Amount,
        amount: Amount,
        limit: Amount,
    },

    #[error("Value {value} below minimum floor {floor}")]
    BelowMinimumFloor { value: Amount, floor: Amount },

    #[error("Cooldown window {requested} exceeds maximum {max}")]
    CooldownWindowTooLong { requested: Ordinal, max: Ordinal },

    #[error("Pair address {address:?} is immutable")]
    ImmutablePairAddress { address: Address },

    #[error("Initial mint already performed")]
    AlreadyInitialMint,

    #[error("Unauthorized caller {caller:?}")]
    Unauthorized { caller: Address },

    #[error("Reentrant invocation of the transfer path")]
    Reentrant,

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("Ledger error: {0}")]
    Ledger(String),

    #[error("Lock poisoned")]
    LockPoisoned,
}
