use crate::domain::{Address, Amount, Ordinal};
use serde::{Deserialize, Serialize};

/// Emitted by every `set_exempt` call, even when membership did not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionChangedPayload {
    pub account: Address,
    pub exempt: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxTransferUpdatedPayload {
    pub max_transfer_amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownUpdatedPayload {
    pub cooldown_window: Ordinal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletLimitUpdatedPayload {
    pub account: Address,
    pub wallet_limit: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRegisteredPayload {
    pub address: Address,
    pub status: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsToggledPayload {
    pub active: bool,
}

/// Union of every notification the gate publishes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateNotification {
    ExemptionChanged(ExemptionChangedPayload),
    MaxTransferUpdated(MaxTransferUpdatedPayload),
    CooldownUpdated(CooldownUpdatedPayload),
    WalletLimitUpdated(WalletLimitUpdatedPayload),
    PairRegistered(PairRegisteredPayload),
    LimitsToggled(LimitsToggledPayload),
}
