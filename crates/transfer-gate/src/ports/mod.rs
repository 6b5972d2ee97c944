//! Ports: the inbound API trait and the outbound collaborator traits.

pub mod inbound;
pub mod outbound;

pub use inbound::TransferGateApi;
pub use outbound::{NotificationSink, PairFactory, TokenLedger};
