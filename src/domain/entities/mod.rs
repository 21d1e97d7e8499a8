pub mod account;
pub mod bar;
pub mod order;
pub mod position;
