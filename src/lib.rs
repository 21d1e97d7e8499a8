//! daysweep: single-pass daily sweep trader.
//!
//! One run loads a symbol universe from a CSV file, fetches recent daily bars
//! for each symbol from the Alpaca data API, evaluates a close-over-close buy
//! rule, submits one-share GTC market orders where the rule fires, and ends
//! with an account and position P&L report.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod secrets;
