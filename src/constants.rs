/// Largest amount a single entry may carry, in minor units.
/// Keeps every balance fold comfortably inside `i64`.
pub const MAX_ENTRY_AMOUNT: i64 = 1_000_000_000_000;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "৳";
pub const DEFAULT_MINOR_UNIT_DIGITS: u32 = 2;
pub const MAX_MINOR_UNIT_DIGITS: u32 = 4;

pub const DEFAULT_LOG_LEVEL: &str = "info";
