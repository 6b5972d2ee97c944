//! Outbound (driven) ports for the transfer gate.
//!
//! These traits define the collaborators the gate depends on: the token
//! ledger that owns balance bookkeeping, the exchange factory consulted once
//! at genesis, and the sink receiving state-change notifications.

use crate::domain::{Address, Amount, GateError};
use crate::events::GateNotification;

/// The external fungible-token ledger the gate guards.
///
/// Balance storage, minting and allowance accounting live entirely behind
/// this trait; the gate only reads balances and supply, and delegates the
/// admitted transfer to the base primitive.
pub trait TokenLedger: Send + Sync {
    /// Current balance of an account.
    fn balance_of(&self, account: &Address) -> Result<Amount, GateError>;

    /// Fixed total supply.
    fn total_supply(&self) -> Result<Amount, GateError>;

    /// The base transfer primitive the gate wraps. Called only after every
    /// admission check has passed.
    fn execute_transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), GateError>;
}

/// Exchange factory consulted once at genesis to create the initial
/// liquidity pair.
pub trait PairFactory: Send + Sync {
    fn create_pair(&self, token: &Address, paired_with: &Address) -> Result<Address, GateError>;
}

/// Receiver for notifications emitted on every state-changing call.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: GateNotification);
}

/// Mock ledger for testing.
#[cfg(test)]
pub struct MockLedger {
    balances: std::collections::HashMap<Address, Amount>,
    supply: Amount,
}

#[cfg(test)]
impl MockLedger {
    pub fn new(supply: Amount) -> Self {
        Self {
            balances: std::collections::HashMap::new(),
            supply,
        }
    }

    pub fn with_balance(mut self, account: Address, balance: Amount) -> Self {
        self.balances.insert(account, balance);
        self
    }
}

#[cfg(test)]
impl TokenLedger for MockLedger {
    fn balance_of(&self, account: &Address) -> Result<Amount, GateError> {
        Ok(self.balances.get(account).copied().unwrap_or(0))
    }

    fn total_supply(&self) -> Result<Amount, GateError> {
        Ok(self.supply)
    }

    fn execute_transfer(
        &self,
        _from: &Address,
        _to: &Address,
        _amount: Amount,
    ) -> Result<(), GateError> {
        Ok(())
    }
}
