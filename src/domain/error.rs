#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot compute {statistic} of an empty sample sequence")]
    EmptySequence { statistic: &'static str },
    #[error("invalid sample range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("sum of samples overflows a 64-bit integer")]
    SumOverflow,
}
