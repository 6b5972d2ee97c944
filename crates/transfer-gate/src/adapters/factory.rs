//! Deterministic pair factory.
//!
//! Stand-in for an external exchange factory: derives the pair address as
//! the first 20 bytes of a Keccak-256 over a domain tag and both token
//! addresses, so repeated wiring of the same token pair yields the same
//! address.

use crate::domain::{Address, GateError};
use crate::ports::PairFactory;
use sha3::{Digest, Keccak256};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicPairFactory;

impl PairFactory for DeterministicPairFactory {
    fn create_pair(&self, token: &Address, paired_with: &Address) -> Result<Address, GateError> {
        let mut hasher = Keccak256::new();
        hasher.update(b"tollgate.pair.v1");
        hasher.update(token);
        hasher.update(paired_with);
        let digest = hasher.finalize();

        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[..20]);
        Ok(address)
    }
}
