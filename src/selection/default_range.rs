use chrono::{DateTime, Months, Utc};

use crate::core::DataPoint;
use crate::error::{OverlayError, OverlayResult};

/// Resolves the initial selection bounds when the host did not configure
/// explicit ones.
///
/// Axis values are interpreted as epoch milliseconds here. An unset end
/// defaults to the x-value of the series' last point; an unset start
/// defaults to one calendar month before the resolved end, floored at the
/// series' first point. Callers cache the result, so this runs once per
/// overlay lifetime.
pub fn resolve_default_range(
    points: &[DataPoint],
    configured_start: Option<f64>,
    configured_end: Option<f64>,
) -> OverlayResult<(f64, f64)> {
    if let (Some(start), Some(end)) = (configured_start, configured_end) {
        return Ok((start, end));
    }

    let first = points.first().ok_or(OverlayError::EmptySeries)?;
    let last = points.last().ok_or(OverlayError::EmptySeries)?;

    let end = configured_end.unwrap_or(last.x);

    let start = match configured_start {
        Some(start) => start,
        None => {
            let month_before = one_month_before_millis(end)?;
            if first.x > month_before {
                first.x
            } else {
                month_before
            }
        }
    };

    Ok((start, end))
}

fn one_month_before_millis(end: f64) -> OverlayResult<f64> {
    if !end.is_finite() {
        return Err(OverlayError::InvalidData(
            "selection end must be finite".to_owned(),
        ));
    }

    let end_time = DateTime::<Utc>::from_timestamp_millis(end as i64).ok_or_else(|| {
        OverlayError::InvalidData(format!("selection end `{end}` is not a representable time"))
    })?;
    let shifted = end_time
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| OverlayError::InvalidData("selection end underflows by one month".to_owned()))?;

    Ok(shifted.timestamp_millis() as f64)
}
