//! Notification sinks.
//!
//! `TracingSink` turns every notification into a structured log line;
//! `MemorySink` captures them for assertions in tests.

use crate::events::GateNotification;
use crate::ports::NotificationSink;
use std::sync::RwLock;
use tracing::info;

/// Logs every notification as a structured tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn publish(&self, notification: GateNotification) {
        match notification {
            GateNotification::ExemptionChanged(p) => {
                info!(account = ?p.account, exempt = p.exempt, "Exemption changed");
            }
            GateNotification::MaxTransferUpdated(p) => {
                info!(
                    max_transfer_amount = p.max_transfer_amount,
                    "Max transfer amount updated"
                );
            }
            GateNotification::CooldownUpdated(p) => {
                info!(cooldown_window = p.cooldown_window, "Cooldown window updated");
            }
            GateNotification::WalletLimitUpdated(p) => {
                info!(
                    account = ?p.account,
                    wallet_limit = p.wallet_limit,
                    "Wallet limit updated"
                );
            }
            GateNotification::PairRegistered(p) => {
                info!(address = ?p.address, status = p.status, "Pair registered");
            }
            GateNotification::LimitsToggled(p) => {
                info!(active = p.active, "Limits toggled");
            }
        }
    }
}

/// Collects notifications in memory for test assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    published: RwLock<Vec<GateNotification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, in order.
    pub fn snapshot(&self) -> Vec<GateNotification> {
        self.published.read().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.published.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for MemorySink {
    fn publish(&self, notification: GateNotification) {
        if let Ok(mut published) = self.published.write() {
            published.push(notification);
        }
    }
}
