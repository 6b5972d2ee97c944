//! Application layer: the service wiring the gate aggregate to its ports.

pub mod service;

pub use service::TransferGateService;
