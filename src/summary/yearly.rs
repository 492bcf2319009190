use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::monthly::{MonthSummary, aggregate_month, round2};
use super::range::{EligibleWindow, resolve_range};
use super::reconcile::{DailyRecord, reconcile};
use crate::model::member::Member;
use crate::model::report::Report;

/// Year-level aggregate over a member's month summaries.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct YearSummary {
    #[schema(example = 2024)]
    pub year: i32,
    pub total_work_complete: i64,
    #[schema(example = 448.7)]
    pub average_work_time: f64,
    pub total_work_time_sum: i64,
    pub total_present_days: u32,
    pub total_leave_days: u32,
}

/// One row of the fleet-wide yearly report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MemberYearSummary {
    pub member_id: u64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(value_type = String, format = "date")]
    pub join_date: NaiveDate,
    #[schema(value_type = Option<String>, format = "date", nullable = true)]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date", nullable = true)]
    pub window_start: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date", nullable = true)]
    pub window_end: Option<NaiveDate>,
    /// Days in the eligible window; 0 when the member had no activity.
    pub total_days: u32,
    pub total_present_days: u32,
    pub total_leave_days: u32,
    /// Pre-approved allowance, reported as-is, never subtracted.
    pub leave_allowance: i32,
    pub total_work_complete: i64,
    pub total_work_time_sum: i64,
    pub average_work_time: f64,
    /// Planned minus actual minutes over the window; negative is overtime.
    pub work_time_due: i64,
    /// `work_time_due` expressed in the member's daily work-time units.
    pub work_time_due_days: f64,
}

/// Sums month summaries into year totals. The work-time average weights
/// every present day equally instead of averaging the per-month averages,
/// so a month with two present days cannot skew the year figure.
pub fn aggregate_year(year: i32, months: &[MonthSummary]) -> YearSummary {
    let mut total_work_complete: i64 = 0;
    let mut total_work_time_sum: i64 = 0;
    let mut total_present_days: u32 = 0;
    let mut total_leave_days: u32 = 0;

    for month in months {
        total_work_complete += month.total_work_complete;
        total_work_time_sum += month.total_work_time_sum;
        total_present_days += month.total_present_days;
        total_leave_days += month.leave_days;
    }

    let average_work_time = if total_present_days > 0 {
        round2(total_work_complete as f64 / total_present_days as f64)
    } else {
        0.0
    };

    YearSummary {
        year,
        total_work_complete,
        average_work_time,
        total_work_time_sum,
        total_present_days,
        total_leave_days,
    }
}

// Reconciled records cover the window contiguously day by day, so a month
// clip maps to a slice by date offset alone.
fn month_slice<'a>(
    records: &'a [DailyRecord],
    window: &EligibleWindow,
    clip: &EligibleWindow,
) -> &'a [DailyRecord] {
    let offset = (clip.start - window.start).num_days() as usize;
    &records[offset..offset + clip.num_days() as usize]
}

/// Month summaries for every month the window touches, empty months
/// included; year leave over these equals window days minus present days.
pub fn window_month_summaries(
    year: i32,
    window: &EligibleWindow,
    records: &[DailyRecord],
) -> Vec<MonthSummary> {
    (1..=12)
        .filter_map(|month| {
            let clip = window.clip_to_month(year, month)?;
            Some(aggregate_month(
                year,
                month,
                month_slice(records, window, &clip),
            ))
        })
        .collect()
}

/// Month summaries restricted to months with at least one present day,
/// which is what the per-member year report lists.
pub fn active_month_summaries(
    year: i32,
    window: &EligibleWindow,
    records: &[DailyRecord],
) -> Vec<MonthSummary> {
    (1..=12)
        .filter_map(|month| {
            let clip = window.clip_to_month(year, month)?;
            let slice = month_slice(records, window, &clip);
            slice
                .iter()
                .any(|record| record.present)
                .then(|| aggregate_month(year, month, slice))
        })
        .collect()
}

/// Runs the whole per-member pipeline for one fleet row: resolve the
/// eligible window from the join date and the latest report date, expand
/// it day by day, aggregate every month it touches, then roll up.
///
/// `last_activity` is the member's latest report date within the year; a
/// member with none gets an empty window and an all-zero row.
pub fn member_year_summary(
    member: &Member,
    year: i32,
    reports: &[Report],
    last_activity: Option<NaiveDate>,
) -> MemberYearSummary {
    let window = last_activity
        .and_then(|last| resolve_range(member.join_date, member.end_date, year, Some(last)));

    let months = match &window {
        Some(window) => {
            let records = reconcile(reports, window);
            window_month_summaries(year, window, &records)
        }
        None => Vec::new(),
    };
    let totals = aggregate_year(year, &months);

    let work_time_due = totals.total_work_time_sum - totals.total_work_complete;
    // A zero (or negative) daily work time is a misconfiguration; divide
    // by one instead of failing.
    let daily_work_time = member.work_time.max(1) as i64;

    MemberYearSummary {
        member_id: member.id,
        name: member.name.clone(),
        email: member.email.clone(),
        join_date: member.join_date,
        end_date: member.end_date,
        window_start: window.map(|w| w.start),
        window_end: window.map(|w| w.end),
        total_days: window.map(|w| w.num_days()).unwrap_or(0),
        total_present_days: totals.total_present_days,
        total_leave_days: totals.total_leave_days,
        leave_allowance: member.leave_allowance,
        total_work_complete: totals.total_work_complete,
        total_work_time_sum: totals.total_work_time_sum,
        average_work_time: totals.average_work_time,
        work_time_due,
        work_time_due_days: round2(work_time_due as f64 / daily_work_time as f64),
    }
}
