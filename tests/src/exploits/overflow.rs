//! # Arithmetic Overflow Probes
//!
//! The two checked additions in the admission pipeline must fail closed:
//! an attacker who can position markers or balances near the top of their
//! integer ranges gains nothing but a rejection.

#[cfg(test)]
mod tests {
    use transfer_gate::domain::{
        Address, Amount, GateConfig, GateError, Ordinal, TransferGate, TransferSide,
        MAX_COOLDOWN_WINDOW,
    };

    const OWNER: Address = [0xAA; 20];
    const PAIR: Address = [0xEE; 20];
    const ALICE: Address = [0x01; 20];
    const BOB: Address = [0x02; 20];
    const SUPPLY: Amount = 1_000_000;

    fn gate() -> TransferGate {
        TransferGate::new(OWNER, PAIR, GateConfig::for_testing())
    }

    #[test]
    fn test_cooldown_marker_near_ordinal_max_cannot_wrap() {
        let mut gate = gate();
        gate.set_cooldown_window(OWNER, MAX_COOLDOWN_WINDOW).unwrap();

        // Marker lands 10 ordinals from the top; marker + window overflows.
        gate.evaluate_transfer(ALICE, BOB, 100, Ordinal::MAX - 10, 0)
            .unwrap();

        // A wrapping addition would compute a tiny ready_at and admit this.
        let err = gate
            .evaluate_transfer(ALICE, PAIR, 100, Ordinal::MAX, 0)
            .unwrap_err();
        assert_eq!(
            err,
            GateError::CooldownNotElapsed {
                side: TransferSide::Sender,
                account: ALICE
            }
        );
    }

    #[test]
    fn test_wallet_limit_near_amount_max_cannot_wrap() {
        let mut gate = gate();
        gate.set_wallet_limit(OWNER, BOB, 1_000, SUPPLY).unwrap();

        // balance + amount overflows u128; a wrapping addition would land
        // far below the limit and admit.
        let err = gate
            .evaluate_transfer(ALICE, BOB, 500, 100, Amount::MAX)
            .unwrap_err();
        assert_eq!(
            err,
            GateError::WalletLimitExceeded {
                account: BOB,
                balance: Amount::MAX,
                amount: 500,
                limit: 1_000
            }
        );
        // The rejection left no throttling state behind.
        assert_eq!(gate.activity(&ALICE), None);
    }

    #[test]
    fn test_extreme_amount_is_just_too_large() {
        let mut gate = gate();
        let err = gate
            .evaluate_transfer(ALICE, BOB, Amount::MAX, 100, 0)
            .unwrap_err();
        assert_eq!(
            err,
            GateError::TransferTooLarge {
                amount: Amount::MAX,
                max: 1_000
            }
        );
    }
}
