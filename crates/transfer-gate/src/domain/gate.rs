//! # Transfer Gate Aggregate
//!
//! The rule engine deciding admit/reject for every attempted transfer, and
//! the sole owner of exemption, classification and throttling state.
//!
//! ## Invariants Enforced
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Roster and exempt flag agree | single `ExemptionRoster` structure holds both |
//! | `last_admitted_at` non-decreasing per account | written only from an admitted plan whose ordinal passed the cooldown check |
//! | Initial pair immutable | `register_pair()` rejects the genesis pair address |
//! | Limits never below floor | setters check against 0.1% of total supply |
//! | No partial state on rejection | `plan_transfer()` is read-only; `commit()` runs only on an admitted plan |
//!
//! ## Evaluation Shape
//!
//! ```text
//! plan_transfer (pure)  ──admit──→  Admission  ──after ledger success──→  commit
//!        │
//!        └──reject──→  GateError (no state touched)
//! ```

use super::entities::{
    limit_floor, AccountActivity, Address, Amount, GateConfig, Ordinal, TransferSide,
    MAX_COOLDOWN_WINDOW,
};
use super::errors::GateError;
use super::roster::ExemptionRoster;
use super::value_objects::{Admission, GateStatus};
use std::collections::{HashMap, HashSet};

/// Admission-control state machine for a single token.
#[derive(Clone, Debug)]
pub struct TransferGate {
    /// The privileged actor. Exempt from genesis.
    owner: Address,
    config: GateConfig,
    /// Master switch for the gating rules. Admission is unconditional while
    /// false; exemption and pair bookkeeping stay writable.
    limits_active: bool,
    roster: ExemptionRoster,
    /// Liquidity-pair classification set.
    pairs: HashSet<Address>,
    /// The pair registered at genesis. Cannot be re-toggled, ever.
    initial_pair: Address,
    /// Per-account throttling state, created lazily, never deleted.
    accounts: HashMap<Address, AccountActivity>,
}

impl TransferGate {
    /// Creates a gate with the genesis pair registered and the owner exempt.
    pub fn new(owner: Address, initial_pair: Address, config: GateConfig) -> Self {
        let mut roster = ExemptionRoster::new();
        roster.grant(owner);

        let mut pairs = HashSet::new();
        pairs.insert(initial_pair);

        Self {
            owner,
            config,
            limits_active: true,
            roster,
            pairs,
            initial_pair,
            accounts: HashMap::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn limits_active(&self) -> bool {
        self.limits_active
    }

    pub fn initial_pair(&self) -> Address {
        self.initial_pair
    }

    pub fn is_exempt(&self, account: &Address) -> bool {
        self.roster.contains(account)
    }

    pub fn is_pair(&self, address: &Address) -> bool {
        self.pairs.contains(address)
    }

    /// Throttling state for an account, if any gated transfer has touched it.
    pub fn activity(&self, account: &Address) -> Option<AccountActivity> {
        self.accounts.get(account).copied()
    }

    /// Roster snapshot. Insertion order except for gaps introduced by
    /// swap-removal; callers must not rely on positions.
    pub fn list_exempt(&self) -> Vec<Address> {
        self.roster.snapshot()
    }

    pub fn status(&self) -> GateStatus {
        GateStatus {
            exempt_count: self.roster.len(),
            pair_count: self.pairs.len(),
            tracked_accounts: self.accounts.len(),
            limits_active: self.limits_active,
            config: self.config,
        }
    }

    fn authorize(&self, caller: Address) -> Result<(), GateError> {
        if caller != self.owner {
            return Err(GateError::Unauthorized { caller });
        }
        Ok(())
    }

    // =========================================================================
    // Privileged setters
    // =========================================================================

    /// Grants or revokes exemption.
    ///
    /// Returns whether membership actually changed; callers emit the
    /// exemption-changed notification either way.
    pub fn set_exempt(
        &mut self,
        caller: Address,
        account: Address,
        exempt: bool,
    ) -> Result<bool, GateError> {
        self.authorize(caller)?;
        let changed = if exempt {
            self.roster.grant(account)
        } else {
            self.roster.revoke(&account)
        };
        Ok(changed)
    }

    /// Updates the per-transfer ceiling. Rejects values below 0.1% of supply.
    pub fn set_max_transfer_amount(
        &mut self,
        caller: Address,
        amount: Amount,
        total_supply: Amount,
    ) -> Result<(), GateError> {
        self.authorize(caller)?;
        let floor = limit_floor(total_supply);
        if amount < floor {
            return Err(GateError::BelowMinimumFloor {
                value: amount,
                floor,
            });
        }
        self.config.max_transfer_amount = amount;
        Ok(())
    }

    pub fn set_cooldown_window(&mut self, caller: Address, window: Ordinal) -> Result<(), GateError> {
        self.authorize(caller)?;
        if window > MAX_COOLDOWN_WINDOW {
            return Err(GateError::CooldownWindowTooLong {
                requested: window,
                max: MAX_COOLDOWN_WINDOW,
            });
        }
        self.config.cooldown_window = window;
        Ok(())
    }

    /// Sets a per-account holding ceiling. Subject to the same floor as the
    /// transfer ceiling.
    pub fn set_wallet_limit(
        &mut self,
        caller: Address,
        account: Address,
        limit: Amount,
        total_supply: Amount,
    ) -> Result<(), GateError> {
        self.authorize(caller)?;
        let floor = limit_floor(total_supply);
        if limit < floor {
            return Err(GateError::BelowMinimumFloor {
                value: limit,
                floor,
            });
        }
        self.accounts.entry(account).or_default().wallet_limit = Some(limit);
        Ok(())
    }

    /// Adds or removes a liquidity-pair classification.
    ///
    /// The genesis pair is permanently fixed; any attempt to re-toggle it is
    /// rejected, including a redundant `status == true`.
    pub fn register_pair(
        &mut self,
        caller: Address,
        address: Address,
        status: bool,
    ) -> Result<(), GateError> {
        self.authorize(caller)?;
        if address == self.initial_pair {
            return Err(GateError::ImmutablePairAddress { address });
        }
        if status {
            self.pairs.insert(address);
        } else {
            self.pairs.remove(&address);
        }
        Ok(())
    }

    pub fn set_limits_active(&mut self, caller: Address, active: bool) -> Result<(), GateError> {
        self.authorize(caller)?;
        self.limits_active = active;
        Ok(())
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Runs every admission check without touching state.
    ///
    /// `recipient_balance` is the ledger's live balance for the recipient;
    /// it is only consulted when wallet limits are enabled and the recipient
    /// carries a ceiling.
    ///
    /// Check order: exemption bypass, amount cap, wallet cap, recipient
    /// cooldown, sender cooldown. The first failure aborts the plan, so no
    /// check runs after an earlier one has rejected.
    pub fn plan_transfer(
        &self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
        recipient_balance: Amount,
    ) -> Result<Admission, GateError> {
        if !self.limits_active {
            return Ok(Admission::bypass(sender, recipient, amount, ordinal));
        }
        if self.is_exempt(&sender) && self.is_exempt(&recipient) {
            return Ok(Admission::bypass(sender, recipient, amount, ordinal));
        }

        if amount > self.config.max_transfer_amount {
            return Err(GateError::TransferTooLarge {
                amount,
                max: self.config.max_transfer_amount,
            });
        }

        if self.config.wallet_limits_enabled {
            self.check_wallet_limit(&recipient, recipient_balance, amount)?;
        }

        let record_recipient = self.cooldown_applies(&recipient);
        if record_recipient {
            self.check_cooldown(&recipient, ordinal, TransferSide::Recipient)?;
        }

        let record_sender = self.cooldown_applies(&sender);
        if record_sender {
            self.check_cooldown(&sender, ordinal, TransferSide::Sender)?;
        }

        Ok(Admission {
            sender,
            recipient,
            ordinal,
            amount,
            record_sender,
            record_recipient,
        })
    }

    /// Makes an admitted plan's cooldown markers durable.
    pub fn commit(&mut self, admission: &Admission) {
        if admission.record_recipient {
            self.accounts
                .entry(admission.recipient)
                .or_default()
                .last_admitted_at = Some(admission.ordinal);
        }
        if admission.record_sender {
            self.accounts
                .entry(admission.sender)
                .or_default()
                .last_admitted_at = Some(admission.ordinal);
        }
    }

    /// Plan and commit in one step, for callers that do not wrap a ledger
    /// delegation between the two.
    pub fn evaluate_transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
        ordinal: Ordinal,
        recipient_balance: Amount,
    ) -> Result<Admission, GateError> {
        let admission =
            self.plan_transfer(sender, recipient, amount, ordinal, recipient_balance)?;
        self.commit(&admission);
        Ok(admission)
    }

    fn cooldown_applies(&self, account: &Address) -> bool {
        !(self.config.pair_cooldown_exempt && self.is_pair(account))
    }

    fn check_cooldown(
        &self,
        account: &Address,
        now: Ordinal,
        side: TransferSide,
    ) -> Result<(), GateError> {
        let Some(last) = self.accounts.get(account).and_then(|a| a.last_admitted_at) else {
            return Ok(());
        };
        // Checked addition: a window large enough to overflow the ordinal
        // type fails closed instead of wrapping and spuriously admitting.
        let ready_at = last.checked_add(self.config.cooldown_window);
        match ready_at {
            Some(ready_at) if now >= ready_at => Ok(()),
            _ => Err(GateError::CooldownNotElapsed {
                side,
                account: *account,
            }),
        }
    }

    fn check_wallet_limit(
        &self,
        recipient: &Address,
        balance: Amount,
        amount: Amount,
    ) -> Result<(), GateError> {
        let Some(limit) = self.accounts.get(recipient).and_then(|a| a.wallet_limit) else {
            return Ok(());
        };
        // Checked addition fails closed on overflow.
        match balance.checked_add(amount) {
            Some(held) if held <= limit => Ok(()),
            _ => Err(GateError::WalletLimitExceeded {
                account: *recipient,
                balance,
                amount,
                limit,
            }),
        }
    }
}
