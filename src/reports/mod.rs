pub mod balance_reporter;
pub mod table;
