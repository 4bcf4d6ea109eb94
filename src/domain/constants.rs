pub const DEFAULT_SAMPLE_COUNT: usize = 10;
pub const DEFAULT_RANGE_MIN: i64 = 1;
pub const DEFAULT_RANGE_MAX: i64 = 100;
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;
