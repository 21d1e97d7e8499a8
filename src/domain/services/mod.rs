pub mod indicators;
pub mod performance;
pub mod signal;
pub mod universe;
