pub mod monitor;
pub mod sweep;
