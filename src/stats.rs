#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::record::GradeRecord;

/// Ordered `(threshold, grade)` pairs for the simple 4.0 bucket, scanned
/// highest-first. A CGPA at or exactly on a threshold earns that grade.
const SIMPLE_GPA_BUCKETS: [(f64, u8); 4] = [(90.0, 4), (80.0, 3), (70.0, 2), (60.0, 1)];

/// An enum to represent the ways a summary cannot be computed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// There is nothing to average over.
    #[error("no grades exist yet")]
    EmptyDataset,
    /// Every record carries zero credits, so the weighted GPA has no
    /// denominator.
    #[error("no credits recorded")]
    NoCredits,
}

/// Aggregate statistics over a set of grade records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Mean of the raw grade percentages.
    pub cgpa:          f64,
    /// 4.0-scale GPA weighted by each course's credit count.
    pub weighted_gpa:  f64,
    /// Letter-style 4.0 bucket derived from the CGPA.
    pub simple_gpa:    u8,
    /// Sum of credits across all records.
    pub total_credits: u32,
    /// Sum of costs across all records.
    pub total_cost:    f64,
}

/// Computes a [`Summary`] over `records`.
///
/// Pure function of its input. Percentages are averaged exactly as stored
/// (garbage in, garbage out), and a zero credit total is reported as
/// [`StatsError::NoCredits`] rather than leaking a NaN.
pub fn summarize(records: &[GradeRecord]) -> Result<Summary, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let total_credits: u32 = records.iter().map(|r| r.credits).sum();
    if total_credits == 0 {
        return Err(StatsError::NoCredits);
    }

    let cgpa = records.iter().map(|r| r.percent).sum::<f64>() / records.len() as f64;
    let quality_points: f64 = records
        .iter()
        .map(|r| (r.percent / 100.0) * f64::from(r.credits))
        .sum();
    let weighted_gpa = quality_points / f64::from(total_credits) * 4.0;
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();

    Ok(Summary {
        cgpa,
        weighted_gpa,
        simple_gpa: simple_gpa(cgpa),
        total_credits,
        total_cost,
    })
}

/// Buckets a CGPA into the simple 4.0 grade via [`SIMPLE_GPA_BUCKETS`].
fn simple_gpa(cgpa: f64) -> u8 {
    SIMPLE_GPA_BUCKETS
        .iter()
        .find(|(threshold, _)| cgpa >= *threshold)
        .map(|&(_, grade)| grade)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_inclusive_at_the_threshold() {
        assert_eq!(simple_gpa(90.0), 4);
        assert_eq!(simple_gpa(89.9), 3);
        assert_eq!(simple_gpa(80.0), 3);
        assert_eq!(simple_gpa(70.0), 2);
        assert_eq!(simple_gpa(60.0), 1);
        assert_eq!(simple_gpa(59.9), 0);
    }

    #[test]
    fn buckets_tolerate_unclamped_percentages() {
        assert_eq!(simple_gpa(120.0), 4);
        assert_eq!(simple_gpa(-5.0), 0);
    }
}
