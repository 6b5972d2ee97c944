//! In-memory token ledger.
//!
//! Reference implementation of the `TokenLedger` port for tests and local
//! wiring. Supply is fixed by a one-shot genesis mint; transfers use checked
//! arithmetic throughout.

use crate::domain::{Address, Amount, GateError};
use crate::ports::TokenLedger;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, Amount>>,
    supply: RwLock<Amount>,
    genesis_done: AtomicBool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            supply: RwLock::new(0),
            genesis_done: AtomicBool::new(false),
        }
    }

    /// One-shot genesis mint crediting the entire fixed supply to `holder`.
    ///
    /// A second call fails with `AlreadyInitialMint` and changes nothing.
    pub fn genesis_mint(&self, holder: Address, supply: Amount) -> Result<(), GateError> {
        if self
            .genesis_done
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(GateError::AlreadyInitialMint);
        }

        let mut balances = self.balances.write().map_err(|_| GateError::LockPoisoned)?;
        let mut total = self.supply.write().map_err(|_| GateError::LockPoisoned)?;
        balances.insert(holder, supply);
        *total = supply;
        Ok(())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, account: &Address) -> Result<Amount, GateError> {
        let balances = self.balances.read().map_err(|_| GateError::LockPoisoned)?;
        Ok(balances.get(account).copied().unwrap_or(0))
    }

    fn total_supply(&self) -> Result<Amount, GateError> {
        let supply = self.supply.read().map_err(|_| GateError::LockPoisoned)?;
        Ok(*supply)
    }

    fn execute_transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), GateError> {
        let mut balances = self.balances.write().map_err(|_| GateError::LockPoisoned)?;

        let from_balance = balances.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(GateError::InsufficientBalance {
                required: amount,
                available: from_balance,
            });
        }

        let to_balance = balances.get(to).copied().unwrap_or(0);
        let new_to_balance = to_balance
            .checked_add(amount)
            .ok_or_else(|| GateError::Ledger("recipient balance overflow".to_string()))?;

        balances.insert(*from, from_balance - amount);
        balances.insert(*to, new_to_balance);
        Ok(())
    }
}
