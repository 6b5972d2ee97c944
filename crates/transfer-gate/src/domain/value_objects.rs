//! Value objects returned by the gate: admission plans and status snapshots.

use super::entities::{Address, Amount, GateConfig, Ordinal};
use serde::{Deserialize, Serialize};

/// The outcome of a successful admission check.
///
/// Carries the pending cooldown-marker writes so the caller can delegate to
/// the ledger first and make the markers durable only once the whole transfer
/// has gone through. A rejected evaluation produces no `Admission` at all,
/// so no partial state can survive a failed check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Admission {
    pub sender: Address,
    pub recipient: Address,
    /// Ordinal the markers will be set to on commit.
    pub ordinal: Ordinal,
    /// Amount the checks were run against.
    pub amount: Amount,
    /// Whether the sender-side cooldown marker is to be written.
    pub record_sender: bool,
    /// Whether the recipient-side cooldown marker is to be written.
    pub record_recipient: bool,
}

impl Admission {
    /// An admission that bypassed every limit and mutates nothing on commit.
    pub fn bypass(sender: Address, recipient: Address, amount: Amount, ordinal: Ordinal) -> Self {
        Self {
            sender,
            recipient,
            ordinal,
            amount,
            record_sender: false,
            record_recipient: false,
        }
    }

    /// True if committing this admission writes no state.
    pub fn is_bypass(&self) -> bool {
        !self.record_sender && !self.record_recipient
    }
}

/// Point-in-time view of the gate for operators and dashboards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStatus {
    pub exempt_count: usize,
    pub pair_count: usize,
    /// Accounts with throttling state (lazily created, never deleted).
    pub tracked_accounts: usize,
    pub limits_active: bool,
    pub config: GateConfig,
}
