pub mod channel;
pub mod debt;
pub mod ledger;
pub mod participant;
