use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_LOG_LEVEL, DEFAULT_MINOR_UNIT_DIGITS, MAX_MINOR_UNIT_DIGITS,
};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub currency_symbol: String,
    pub minor_unit_digits: u32,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string()),
            minor_unit_digits: env::var("MINOR_UNIT_DIGITS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MINOR_UNIT_DIGITS)
                .min(MAX_MINOR_UNIT_DIGITS),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
