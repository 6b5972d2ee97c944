//! # Domain Entities for the Transfer Gate
//!
//! Core data structures shared by the gate aggregate and its ports.
//!
//! ## Type Decisions
//!
//! - `Amount = u128` - Sufficient for any fixed supply with 18 decimal places.
//!   A 256-bit integer would require an extra dependency and wider arithmetic;
//!   u128 covers all practical token supplies.
//! - `Ordinal = u64` - A ledger-ordering unit. Works unchanged whether the
//!   ledger feeds in block heights or unix timestamps; the gate only compares
//!   and adds ordinals.

use serde::{Deserialize, Serialize};

pub type Address = [u8; 20];
pub type Amount = u128;
pub type Ordinal = u64;

/// Maximum basis points (100%).
pub const MAX_BPS: Amount = 10_000;

/// Floor for configurable limits, in basis points of total supply (0.1%).
pub const LIMIT_FLOOR_BPS: Amount = 10;

/// Upper bound for the cooldown window, in ordinals.
///
/// One day when the ordinal is a unix-second timestamp; far more than any
/// realistic throttle when it is a block height. A window above this would
/// let a misconfiguration freeze all gated accounts.
pub const MAX_COOLDOWN_WINDOW: Ordinal = 86_400;

/// Base unit for one whole token (18 decimal places).
pub const TOKEN_UNIT: Amount = 1_000_000_000_000_000_000;

/// Smallest value accepted for `max_transfer_amount` and per-account wallet
/// limits: 0.1% of total supply, rounded down.
pub fn limit_floor(total_supply: Amount) -> Amount {
    total_supply / MAX_BPS * LIMIT_FLOOR_BPS
}

/// Which side of a transfer a check applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferSide {
    Sender,
    Recipient,
}

/// Per-account throttling state.
///
/// Created lazily on the first gated transfer touching the account and never
/// deleted. `last_admitted_at` is monotonically non-decreasing: it is only
/// written with the ordinal of an admitted transfer, and admission requires
/// the cooldown window to have elapsed since the previous write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActivity {
    /// Ordinal of the last admitted transfer touching this account.
    pub last_admitted_at: Option<Ordinal>,
    /// Maximum balance this account may hold after a transfer. `None` means
    /// no per-account ceiling.
    pub wallet_limit: Option<Amount>,
}

/// Global gate limits, mutated only by the owner and read on every gated
/// transfer.
///
/// The two policy flags select between the observed deployment profiles:
/// `pair_cooldown_exempt` skips the cooldown check on the pair side of a
/// swap, `wallet_limits_enabled` turns on per-account holding ceilings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Largest single transfer the gate admits.
    pub max_transfer_amount: Amount,
    /// Ordinals that must elapse between admitted transfers per account.
    pub cooldown_window: Ordinal,
    /// Skip the cooldown check for the side classified as a liquidity pair.
    pub pair_cooldown_exempt: bool,
    /// Enforce per-account holding ceilings on recipients.
    pub wallet_limits_enabled: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_transfer_amount: 20_000 * TOKEN_UNIT,
            cooldown_window: 30,
            pair_cooldown_exempt: true,
            wallet_limits_enabled: false,
        }
    }
}

impl GateConfig {
    /// Creates a config with small round numbers for tests.
    pub fn for_testing() -> Self {
        Self {
            max_transfer_amount: 1_000,
            cooldown_window: 5,
            pair_cooldown_exempt: true,
            wallet_limits_enabled: true,
        }
    }
}
