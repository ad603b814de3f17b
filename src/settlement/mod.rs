pub mod balance;
pub mod engine;
pub mod matcher;
pub mod summary;
