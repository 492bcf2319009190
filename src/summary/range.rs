use chrono::NaiveDate;

use super::calendar;

/// Inclusive date range over which a member's attendance is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EligibleWindow {
    pub fn num_days(&self) -> u32 {
        (self.end - self.start).num_days() as u32 + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Intersection with one calendar month; `None` when disjoint. Partial
    /// months keep only the days inside the window, so leave-day counts
    /// never get inflated by days the member was not eligible for.
    pub fn clip_to_month(&self, year: i32, month: u32) -> Option<EligibleWindow> {
        let (first, last) = calendar::month_bounds(year, month)?;
        let start = self.start.max(first);
        let end = self.end.min(last);
        (start <= end).then_some(EligibleWindow { start, end })
    }
}

/// Resolves the year-mode window.
///
/// Lower bound is the later of the join date and January 1; the upper
/// bound is the earlier of the last recorded activity (December 31 when
/// unknown), the member's end date, and December 31. A start past the end
/// is a legitimate state (member joined after the query year, ended before
/// it, or has activity only before joining) and collapses to `None` rather
/// than an error; callers produce an empty summary for it.
pub fn resolve_range(
    join_date: NaiveDate,
    end_date: Option<NaiveDate>,
    year: i32,
    last_activity: Option<NaiveDate>,
) -> Option<EligibleWindow> {
    let (jan1, dec31) = calendar::year_bounds(year)?;
    let start = join_date.max(jan1);
    let mut end = last_activity.unwrap_or(dec31).min(dec31);
    if let Some(end_date) = end_date {
        end = end.min(end_date);
    }
    (start <= end).then_some(EligibleWindow { start, end })
}

/// Resolves the month-mode window: the calendar month clipped by the
/// membership bounds only. Days after the member's last report still count
/// as leave here, so activity never clips a requested month.
pub fn resolve_month_range(
    join_date: NaiveDate,
    end_date: Option<NaiveDate>,
    year: i32,
    month: u32,
) -> Option<EligibleWindow> {
    let (first, last) = calendar::month_bounds(year, month)?;
    let start = join_date.max(first);
    let mut end = last;
    if let Some(end_date) = end_date {
        end = end.min(end_date);
    }
    (start <= end).then_some(EligibleWindow { start, end })
}
