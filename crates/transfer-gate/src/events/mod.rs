//! # Gate Notifications
//!
//! Payloads emitted on every state-changing call, each carrying the changed
//! value and, where applicable, the affected account.
//!
//! - `ExemptionChangedPayload`: every `set_exempt` call, idempotent ones
//!   included
//! - `MaxTransferUpdatedPayload` / `CooldownUpdatedPayload` /
//!   `WalletLimitUpdatedPayload`: limit setters
//! - `PairRegisteredPayload`: classifier updates
//! - `LimitsToggledPayload`: master switch

pub mod payloads;

pub use payloads::*;
