//! Adapters: in-memory implementations of the outbound ports.

pub mod factory;
pub mod memory_ledger;
pub mod publisher;

pub use factory::DeterministicPairFactory;
pub use memory_ledger::InMemoryLedger;
pub use publisher::{MemorySink, TracingSink};
