//! # Reentrancy Probe
//!
//! A malicious ledger implementation that, while executing the delegated
//! transfer primitive, turns around and calls back into the gate. The entry
//! guard must refuse the nested call before any gate state or lock is
//! touched, and the outer transfer must complete normally.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use transfer_gate::adapters::{DeterministicPairFactory, InMemoryLedger, MemorySink};
    use transfer_gate::domain::{Address, Amount, GateConfig, GateError};
    use transfer_gate::ports::TokenLedger;
    use transfer_gate::{TransferGateApi, TransferGateService};

    const OWNER: Address = [0xAA; 20];
    const TOKEN: Address = [0x70; 20];
    const NATIVE: Address = [0x71; 20];
    const ALICE: Address = [0x01; 20];
    const SUPPLY: Amount = 1_000_000;

    /// Ledger that re-enters the gate from inside the transfer primitive.
    struct ReentrantLedger {
        inner: InMemoryLedger,
        /// Armed after service construction.
        target: Mutex<Option<Arc<TransferGateService>>>,
        /// What the nested call came back with.
        observed: Mutex<Option<Result<(), GateError>>>,
    }

    impl ReentrantLedger {
        fn new() -> Self {
            Self {
                inner: InMemoryLedger::new(),
                target: Mutex::new(None),
                observed: Mutex::new(None),
            }
        }

        fn arm(&self, service: Arc<TransferGateService>) {
            *self.target.lock().unwrap() = Some(service);
        }

        fn observed(&self) -> Option<Result<(), GateError>> {
            self.observed.lock().unwrap().clone()
        }
    }

    impl TokenLedger for ReentrantLedger {
        fn balance_of(&self, account: &Address) -> Result<Amount, GateError> {
            self.inner.balance_of(account)
        }

        fn total_supply(&self) -> Result<Amount, GateError> {
            self.inner.total_supply()
        }

        fn execute_transfer(
            &self,
            from: &Address,
            to: &Address,
            amount: Amount,
        ) -> Result<(), GateError> {
            // Attack: bounce the funds straight back before the outer call
            // has committed anything.
            let target = self.target.lock().unwrap().clone();
            if let Some(service) = target {
                let nested = service.transfer(*to, *from, amount, 0);
                *self.observed.lock().unwrap() = Some(nested);
            }
            self.inner.execute_transfer(from, to, amount)
        }
    }

    #[test]
    fn test_nested_transfer_is_rejected_and_outer_completes() {
        let ledger = Arc::new(ReentrantLedger::new());
        ledger.inner.genesis_mint(OWNER, SUPPLY).unwrap();

        let service = Arc::new(
            TransferGateService::initialize(
                OWNER,
                TOKEN,
                NATIVE,
                GateConfig::for_testing(),
                ledger.clone(),
                &DeterministicPairFactory,
                Arc::new(MemorySink::new()),
            )
            .unwrap(),
        );
        ledger.arm(service.clone());

        service.transfer(OWNER, ALICE, 1_000, 100).unwrap();

        // The nested call was refused by the entry guard, not by a deadlock
        // or a cooldown, and the outer transfer still moved the funds once.
        assert_eq!(ledger.observed(), Some(Err(GateError::Reentrant)));
        assert_eq!(ledger.balance_of(&ALICE).unwrap(), 1_000);
        assert_eq!(ledger.balance_of(&OWNER).unwrap(), SUPPLY - 1_000);
    }

    #[test]
    fn test_guard_resets_after_rejection() {
        let ledger = Arc::new(ReentrantLedger::new());
        ledger.inner.genesis_mint(OWNER, SUPPLY).unwrap();

        let service = Arc::new(
            TransferGateService::initialize(
                OWNER,
                TOKEN,
                NATIVE,
                GateConfig::for_testing(),
                ledger.clone(),
                &DeterministicPairFactory,
                Arc::new(MemorySink::new()),
            )
            .unwrap(),
        );
        ledger.arm(service.clone());

        // A rejected outer call (oversized) must release the guard.
        service.transfer(OWNER, ALICE, SUPPLY, 100).unwrap_err();
        // And so must an admitted one.
        service.transfer(OWNER, ALICE, 1_000, 100).unwrap();
        service.transfer(OWNER, ALICE, 1_000, 200).unwrap();
    }
}
