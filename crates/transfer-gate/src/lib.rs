//! # transfer-gate
//!
//! Admission control for a fungible-token ledger: every attempted transfer
//! is either admitted or rejected before the ledger moves a single unit, and
//! admission updates per-account throttling state.
//!
//! ## Responsibilities
//!
//! - **Exemption Registry**: enumerable roster of accounts the limits skip,
//!   with O(1) swap-removal
//! - **Rate Limiter**: per-account cooldown measured in ledger ordinals
//!   (block height or timestamp)
//! - **Amount/Balance Capper**: per-transfer ceiling plus optional
//!   per-account holding ceilings
//! - **Counterparty Classifier**: liquidity-pair addresses, with the genesis
//!   pair fixed forever
//!
//! Balance bookkeeping (minting, storage, allowances) lives entirely behind
//! the [`ports::TokenLedger`] trait; the gate decides and throttles, nothing
//! else.
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - in-memory ledger, notification sinks, pair factory │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TransferGateApi trait                      │
//! │  ports/outbound.rs - TokenLedger, PairFactory, NotificationSink │
//! │  application/      - TransferGateService (guard + orchestration)│
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - Address, Amount, Ordinal, GateConfig │
//! │  domain/roster.rs        - ExemptionRoster                      │
//! │  domain/gate.rs          - TransferGate (plan → commit)         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//!
//! Strictly sequential and atomic per call: every evaluation and every
//! privileged setter is all-or-nothing, a rejection leaves state untouched,
//! and a reentrant invocation of the transfer path is refused outright.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod events;
pub mod ports;

pub use application::TransferGateService;
pub use domain::{
    Address, Admission, Amount, GateConfig, GateError, GateStatus, Ordinal, TransferGate,
    TransferSide,
};
pub use events::GateNotification;
pub use ports::{NotificationSink, PairFactory, TokenLedger, TransferGateApi};
