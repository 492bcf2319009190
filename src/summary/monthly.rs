use serde::Serialize;
use utoipa::ToSchema;

use super::calendar;
use super::reconcile::DailyRecord;
use super::timeavg;

/// Aggregate over one month of reconciled daily records.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthSummary {
    #[schema(example = "January")]
    pub month: String,
    #[schema(example = 2024)]
    pub year: i32,
    /// Actual worked minutes summed over present days.
    pub total_work_complete: i64,
    #[schema(example = 451.25)]
    pub average_work_time: f64,
    pub total_present_days: u32,
    pub leave_days: u32,
    /// Planned minutes summed over present days.
    pub total_work_time_sum: i64,
    #[schema(example = "09:12:45", nullable = true)]
    pub average_in_time: Option<String>,
    #[schema(example = "18:03:10", nullable = true)]
    pub average_out_time: Option<String>,
}

/// Two-decimal rounding, as the report payloads present averages.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregates one month. `records` must be the reconciliation of the
/// window-clipped month, so `records.len()` is the number of eligible days
/// and `present + leave == records.len()` holds exactly.
pub fn aggregate_month(year: i32, month: u32, records: &[DailyRecord]) -> MonthSummary {
    let mut total_work_complete: i64 = 0;
    let mut total_work_time_sum: i64 = 0;
    let mut total_present_days: u32 = 0;
    let mut in_times = Vec::new();
    let mut out_times = Vec::new();

    for record in records {
        if !record.present {
            continue;
        }
        total_present_days += 1;
        total_work_complete += record.total_work_time as i64;
        total_work_time_sum += record.work_time as i64;
        if let Some(in_time) = record.in_time {
            in_times.push(in_time);
        }
        if let Some(out_time) = record.out_time {
            out_times.push(out_time);
        }
    }

    let leave_days = records.len() as u32 - total_present_days;
    let average_work_time = if total_present_days > 0 {
        round2(total_work_complete as f64 / total_present_days as f64)
    } else {
        0.0
    };

    MonthSummary {
        month: calendar::month_name(month).to_string(),
        year,
        total_work_complete,
        average_work_time,
        total_present_days,
        leave_days,
        total_work_time_sum,
        average_in_time: timeavg::average_clock_time(&in_times).map(timeavg::format_clock_time),
        average_out_time: timeavg::average_clock_time(&out_times).map(timeavg::format_clock_time),
    }
}
