use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::calendar;
use super::range::EligibleWindow;
use crate::model::report::Report;

/// One calendar day inside an eligible window: a real report projected to
/// a fixed shape, or a synthesized absence for days with no report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyRecord {
    #[schema(example = "2024-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "Friday")]
    pub day_name: &'static str,
    pub work_time: i32,
    #[schema(value_type = Option<String>, format = "date-time", nullable = true)]
    pub in_time: Option<NaiveDateTime>,
    #[schema(value_type = Option<String>, format = "date-time", nullable = true)]
    pub out_time: Option<NaiveDateTime>,
    pub short_leave_time: i32,
    pub total_work_time: i32,
    pub status: i8,
    // Set at reconciliation time so aggregators never have to guess
    // presence from nullable fields. Not part of the payload.
    #[serde(skip)]
    pub present: bool,
}

impl DailyRecord {
    fn from_report(report: &Report) -> Self {
        DailyRecord {
            date: report.date,
            day_name: calendar::day_name(report.date),
            work_time: report.work_time,
            in_time: Some(report.in_time),
            out_time: report.out_time,
            short_leave_time: report.short_leave_time,
            total_work_time: report.total_work_time.unwrap_or(0),
            status: report.status,
            present: true,
        }
    }

    fn absent(date: NaiveDate) -> Self {
        DailyRecord {
            date,
            day_name: calendar::day_name(date),
            work_time: 0,
            in_time: None,
            out_time: None,
            short_leave_time: 0,
            total_work_time: 0,
            status: 0,
            present: false,
        }
    }
}

/// Expands an eligible window into exactly one record per calendar day,
/// ascending, matching reports by date and filling gaps with absences.
///
/// Callers pass reports already filtered to the member; rows outside the
/// window are ignored. Should the one-report-per-date invariant ever be
/// violated upstream, the last row indexed wins.
pub fn reconcile(reports: &[Report], window: &EligibleWindow) -> Vec<DailyRecord> {
    let by_date: HashMap<NaiveDate, &Report> = reports.iter().map(|r| (r.date, r)).collect();

    window
        .start
        .iter_days()
        .take_while(|day| *day <= window.end)
        .map(|day| match by_date.get(&day) {
            Some(report) => DailyRecord::from_report(report),
            None => DailyRecord::absent(day),
        })
        .collect()
}
