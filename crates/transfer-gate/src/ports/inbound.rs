//! # Inbound Port - TransferGateApi
//!
//! Primary driving port exposing the gate to the ledger wrapper and to
//! administrators.
//!
//! Every method is a fully serialized, all-or-nothing operation: a rejection
//! leaves gate state exactly as it was before the call began, and no
//! in-progress state is ever visible to another caller.

use crate::domain::{Address, Admission, Amount, GateError, GateStatus, Ordinal};

/// Primary API for the transfer gate.
///
/// # Example
///
/// ```rust,ignore
/// use transfer_gate::ports::TransferGateApi;
///
/// fn example(gate: &impl TransferGateApi, user: [u8; 20], shop: [u8; 20]) {
///     // Gated wrapper around the ledger's transfer primitive.
///     gate.transfer(user, shop, 1_000, 7_500_000).unwrap();
/// }
/// ```
pub trait TransferGateApi: Send + Sync {
    /// Runs the full admission pipeline and, on admit, delegates to the
    /// ledger's base transfer primitive before making the cooldown markers
    /// durable.
    ///
    /// # Errors
    /// - `TransferTooLarge`: amount above the per-transfer ceiling
    /// - `WalletLimitExceeded`: recipient holding ceiling breached
    /// - `CooldownNotElapsed`: either side still throttled (the error names
    ///   the side)
    /// - `Reentrant`: nested invocation of the transfer path
    /// - `InsufficientBalance` / `Ledger`: delegated primitive failed; gate
    ///   state is untouched in that case
    fn transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<(), GateError>;

    /// Admission decision without ledger delegation. On admit the cooldown
    /// markers are recorded as part of this same call.
    fn evaluate_transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<Admission, GateError>;

    /// Grants or revokes exemption. Owner only. Emits an exemption-changed
    /// notification on every call, including idempotent ones.
    fn set_exempt(&self, caller: Address, account: Address, exempt: bool)
        -> Result<(), GateError>;

    /// Roster snapshot; callers must not rely on positions.
    fn list_exempt(&self) -> Result<Vec<Address>, GateError>;

    /// Updates the per-transfer ceiling. Owner only; floor-checked.
    fn set_max_transfer_amount(&self, caller: Address, amount: Amount) -> Result<(), GateError>;

    /// Updates the cooldown window. Owner only; ceiling-checked.
    fn set_cooldown_window(&self, caller: Address, window: Ordinal) -> Result<(), GateError>;

    /// Sets a per-account holding ceiling. Owner only; floor-checked.
    fn set_wallet_limit(
        &self,
        caller: Address,
        account: Address,
        limit: Amount,
    ) -> Result<(), GateError>;

    /// Adds or removes a liquidity-pair classification. Owner only; the
    /// genesis pair is immutable.
    fn register_pair(&self, caller: Address, address: Address, status: bool)
        -> Result<(), GateError>;

    /// Master switch for the gating rules. Owner only.
    fn set_limits_active(&self, caller: Address, active: bool) -> Result<(), GateError>;

    /// Point-in-time gate snapshot.
    fn status(&self) -> Result<GateStatus, GateError>;
}
