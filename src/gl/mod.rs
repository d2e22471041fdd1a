pub mod account;
pub mod balance;
pub mod filter;
pub mod journal;
pub mod ledger;
