//! Ranking and truncation of probability rows.

use crate::error::StatsError;
use crate::probability::DayHourProbability;

fn check_n(n: usize) -> Result<(), StatsError> {
    if n == 0 {
        return Err(StatsError::InvalidParameter(
            "top-N must be positive".into(),
        ));
    }
    Ok(())
}

/// Keep the `n` highest-probability rows per day.
///
/// Output is ordered by day, then descending total probability. The sort is
/// stable, so rows tied on total probability keep their incoming order.
pub fn top_per_day(
    rows: &[DayHourProbability],
    n: usize,
) -> Result<Vec<DayHourProbability>, StatsError> {
    check_n(n)?;

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.day.cmp(&b.day).then(b.total.total_cmp(&a.total)));

    let mut out = Vec::new();
    let mut current_day = None;
    let mut kept = 0;
    for row in sorted {
        if current_day != Some(row.day) {
            current_day = Some(row.day);
            kept = 0;
        }
        if kept < n {
            out.push(row);
            kept += 1;
        }
    }
    Ok(out)
}

/// Keep the `n` highest-probability rows overall, ungrouped.
pub fn top_overall(
    rows: &[DayHourProbability],
    n: usize,
) -> Result<Vec<DayHourProbability>, StatsError> {
    check_n(n)?;

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
    sorted.truncate(n);
    Ok(sorted)
}
