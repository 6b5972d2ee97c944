//! Transfer Gate Service
//!
//! Implements `TransferGateApi` over the gate aggregate, the external ledger
//! and the notification sink.
//!
//! Orchestration per gated transfer:
//! 1. Reentrancy guard (checked before any lock is touched)
//! 2. Plan: every admission check, read-only
//! 3. Delegate to the ledger's base transfer primitive
//! 4. Commit the cooldown markers
//!
//! A failure at any step aborts the call and leaves gate state exactly as it
//! was; the markers from step 4 exist only if step 3 succeeded.

use crate::domain::{
    limit_floor, AccountActivity, Address, Admission, Amount, GateConfig, GateError, GateStatus,
    Ordinal, TransferGate, MAX_COOLDOWN_WINDOW,
};
use crate::events::{
    CooldownUpdatedPayload, ExemptionChangedPayload, GateNotification, LimitsToggledPayload,
    MaxTransferUpdatedPayload, PairRegisteredPayload, WalletLimitUpdatedPayload,
};
use crate::ports::{NotificationSink, PairFactory, TokenLedger, TransferGateApi};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Gate service guarding one token ledger.
pub struct TransferGateService {
    gate: RwLock<TransferGate>,
    ledger: Arc<dyn TokenLedger>,
    sink: Arc<dyn NotificationSink>,
    /// Entry guard for the externally visible transfer path.
    entered: AtomicBool,
}

impl std::fmt::Debug for TransferGateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferGateService")
            .field("entered", &self.entered)
            .finish_non_exhaustive()
    }
}

impl TransferGateService {
    /// Wires the gate at genesis.
    ///
    /// Registers the factory-created initial pair (permanently immutable
    /// afterwards) and validates the starting config against the ledger's
    /// fixed supply.
    pub fn initialize(
        owner: Address,
        token: Address,
        wrapped_native: Address,
        config: GateConfig,
        ledger: Arc<dyn TokenLedger>,
        factory: &dyn PairFactory,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, GateError> {
        let supply = ledger.total_supply()?;
        let floor = limit_floor(supply);
        if config.max_transfer_amount < floor {
            return Err(GateError::BelowMinimumFloor {
                value: config.max_transfer_amount,
                floor,
            });
        }
        if config.cooldown_window > MAX_COOLDOWN_WINDOW {
            return Err(GateError::CooldownWindowTooLong {
                requested: config.cooldown_window,
                max: MAX_COOLDOWN_WINDOW,
            });
        }

        let initial_pair = factory.create_pair(&token, &wrapped_native)?;
        info!(
            owner = ?owner,
            initial_pair = ?initial_pair,
            total_supply = supply,
            "Transfer gate initialized"
        );

        Ok(Self {
            gate: RwLock::new(TransferGate::new(owner, initial_pair, config)),
            ledger,
            sink,
            entered: AtomicBool::new(false),
        })
    }

    /// Throttling state for an account, if any gated transfer has touched it.
    pub fn account_activity(
        &self,
        account: &Address,
    ) -> Result<Option<AccountActivity>, GateError> {
        let gate = self.gate.read().map_err(|_| GateError::LockPoisoned)?;
        Ok(gate.activity(account))
    }

    fn enter(&self) -> Result<(), GateError> {
        if self
            .entered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Reentrant invocation of the transfer path rejected");
            return Err(GateError::Reentrant);
        }
        Ok(())
    }

    fn exit(&self) {
        self.entered.store(false, Ordering::SeqCst);
    }

    fn transfer_locked(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<(), GateError> {
        let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;

        let recipient_balance = if gate.config().wallet_limits_enabled {
            self.ledger.balance_of(&recipient)?
        } else {
            0
        };

        let admission = gate.plan_transfer(sender, recipient, amount, ordinal, recipient_balance)?;
        self.ledger.execute_transfer(&sender, &recipient, amount)?;
        gate.commit(&admission);

        debug!(
            sender = ?sender,
            recipient = ?recipient,
            amount,
            ordinal,
            bypass = admission.is_bypass(),
            "Transfer admitted"
        );
        Ok(())
    }

    fn evaluate_locked(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<Admission, GateError> {
        let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;

        let recipient_balance = if gate.config().wallet_limits_enabled {
            self.ledger.balance_of(&recipient)?
        } else {
            0
        };

        gate.evaluate_transfer(sender, recipient, amount, ordinal, recipient_balance)
    }
}

impl TransferGateApi for TransferGateService {
    fn transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<(), GateError> {
        self.enter()?;
        let result = self.transfer_locked(sender, recipient, amount, ordinal);
        self.exit();
        result
    }

    fn evaluate_transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
    ) -> Result<Admission, GateError> {
        self.enter()?;
        let result = self.evaluate_locked(sender, recipient, amount, ordinal);
        self.exit();
        result
    }

    fn set_exempt(
        &self,
        caller: Address,
        account: Address,
        exempt: bool,
    ) -> Result<(), GateError> {
        let changed = {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.set_exempt(caller, account, exempt)?
        };
        // Emitted on every call, idempotent ones included.
        self.sink
            .publish(GateNotification::ExemptionChanged(ExemptionChangedPayload {
                account,
                exempt,
            }));
        info!(account = ?account, exempt, changed, "Exemption updated");
        Ok(())
    }

    fn list_exempt(&self) -> Result<Vec<Address>, GateError> {
        let gate = self.gate.read().map_err(|_| GateError::LockPoisoned)?;
        Ok(gate.list_exempt())
    }

    fn set_max_transfer_amount(&self, caller: Address, amount: Amount) -> Result<(), GateError> {
        let supply = self.ledger.total_supply()?;
        {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.set_max_transfer_amount(caller, amount, supply)?;
        }
        self.sink.publish(GateNotification::MaxTransferUpdated(
            MaxTransferUpdatedPayload {
                max_transfer_amount: amount,
            },
        ));
        info!(max_transfer_amount = amount, "Max transfer amount updated");
        Ok(())
    }

    fn set_cooldown_window(&self, caller: Address, window: Ordinal) -> Result<(), GateError> {
        {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.set_cooldown_window(caller, window)?;
        }
        self.sink
            .publish(GateNotification::CooldownUpdated(CooldownUpdatedPayload {
                cooldown_window: window,
            }));
        info!(cooldown_window = window, "Cooldown window updated");
        Ok(())
    }

    fn set_wallet_limit(
        &self,
        caller: Address,
        account: Address,
        limit: Amount,
    ) -> Result<(), GateError> {
        let supply = self.ledger.total_supply()?;
        {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.set_wallet_limit(caller, account, limit, supply)?;
        }
        self.sink.publish(GateNotification::WalletLimitUpdated(
            WalletLimitUpdatedPayload {
                account,
                wallet_limit: limit,
            },
        ));
        info!(account = ?account, wallet_limit = limit, "Wallet limit updated");
        Ok(())
    }

    fn register_pair(
        &self,
        caller: Address,
        address: Address,
        status: bool,
    ) -> Result<(), GateError> {
        {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.register_pair(caller, address, status)?;
        }
        self.sink
            .publish(GateNotification::PairRegistered(PairRegisteredPayload {
                address,
                status,
            }));
        info!(address = ?address, status, "Pair registration updated");
        Ok(())
    }

    fn set_limits_active(&self, caller: Address, active: bool) -> Result<(), GateError> {
        {
            let mut gate = self.gate.write().map_err(|_| GateError::LockPoisoned)?;
            gate.set_limits_active(caller, active)?;
        }
        self.sink
            .publish(GateNotification::LimitsToggled(LimitsToggledPayload {
                active,
            }));
        info!(active, "Limits toggled");
        Ok(())
    }

    fn status(&self) -> Result<GateStatus, GateError> {
        let gate = self.gate.read().map_err(|_| GateError::LockPoisoned)?;
        Ok(gate.status())
    }
}
