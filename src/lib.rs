//! # cash-flow-minimizer
//!
//! Settles a group's mutual debts with few transfers, where a transfer is
//! only valid between two participants sharing a payment channel (UPI).
//!
//! One participant, the Treasurer, accepts every channel in use and routes
//! payments between a debtor and a creditor who share none.
//!
//! ## Architecture
//!
//! - **core** — Participants, channels, debts and the validated ledger
//! - **settlement** — Net balances, channel matching and the greedy settlement loop
//! - **input** — JSON and console token formats for groups
//! - **simulation** — Random group generation for benches and tests

pub mod core;
pub mod input;
pub mod settlement;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::channel::{ChannelId, ChannelSet};
    pub use crate::core::debt::{Debt, DebtEntry};
    pub use crate::core::ledger::{Ledger, LedgerError};
    pub use crate::core::participant::{Participant, ParticipantEntry, ParticipantName};
    pub use crate::input::GroupInput;
    pub use crate::settlement::balance::BalanceSheet;
    pub use crate::settlement::engine::{settle, Route, Settlement, SettlementEngine, SettlementPlan};
    pub use crate::settlement::summary::SettlementSummary;
}
