pub mod alpaca_data;
pub mod alpaca_trading;
