pub const LOW_COLUMN: &str = "low";
pub const HIGH_COLUMN: &str = "high";

/// Intervals per generated batch.
pub const DEFAULT_COUNT: usize = 1_000_000;
/// Endpoints are drawn from `[0, 2^32)`.
pub const DEFAULT_UPPER_BOUND: i64 = 1 << 32;
/// Generated intervals span at most `2^20`.
pub const DEFAULT_MAX_SPAN: i64 = 1 << 20;
