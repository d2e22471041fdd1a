pub mod date;
pub mod logging;
