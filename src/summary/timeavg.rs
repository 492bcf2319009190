use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Mean clock time of a set of timestamps; `None` when there are none.
///
/// Only the time-of-day component takes part in the mean. Averaging whole
/// epoch values would shift the rendered clock time by a fraction of a day
/// whenever the dates differ (two 09:00 stamps one day apart would come
/// out as 21:00), so the date component is discarded up front.
pub fn average_clock_time(times: &[NaiveDateTime]) -> Option<NaiveTime> {
    if times.is_empty() {
        return None;
    }
    let sum: i64 = times
        .iter()
        .map(|ts| ts.time().num_seconds_from_midnight() as i64)
        .sum();
    let mean = (sum as f64 / times.len() as f64).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(mean, 0)
}

/// "HH:MM:SS", the rendering the summary payloads use.
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
