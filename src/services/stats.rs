use crate::domain::error::StatsError;
use crate::domain::models::{SampleSequence, Statistics};

/// Total of all samples; the empty sequence sums to 0.
pub fn sum(samples: &SampleSequence) -> Result<i64, StatsError> {
    samples
        .iter()
        .try_fold(0i64, |acc, v| acc.checked_add(*v))
        .ok_or(StatsError::SumOverflow)
}

pub fn max(samples: &SampleSequence) -> Result<i64, StatsError> {
    samples
        .iter()
        .copied()
        .max()
        .ok_or(StatsError::EmptySequence {
            statistic: "maximum",
        })
}

pub fn min(samples: &SampleSequence) -> Result<i64, StatsError> {
    samples
        .iter()
        .copied()
        .min()
        .ok_or(StatsError::EmptySequence {
            statistic: "minimum",
        })
}

pub fn summarize(samples: &SampleSequence) -> Result<Statistics, StatsError> {
    let stats = Statistics {
        sum: sum(samples)?,
        max: max(samples)?,
        min: min(samples)?,
    };
    tracing::debug!(sum = stats.sum, max = stats.max, min = stats.min, "derived statistics");
    Ok(stats)
}
