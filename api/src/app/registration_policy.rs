//! Registration policy constants
//!
//! Thresholds applied by the user service when admitting a new user.

/// Minimum age, in whole years, on the day of registration
pub const MIN_AGE_YEARS: u32 = 21;

/// Smallest credit limit accepted for users subject to a limit
pub const MIN_CREDIT_LIMIT: i32 = 500;
