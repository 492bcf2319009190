use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One day's time-clock record for one member. At most one row exists per
/// (member_id, date).
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Report {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1)]
    pub member_id: u64,
    #[schema(example = "2024-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,
    /// Planned work minutes for the day.
    #[schema(example = 480)]
    pub work_time: i32,
    #[schema(example = "2024-01-05T09:02:11", value_type = String, format = "date-time")]
    pub in_time: NaiveDateTime,
    /// Absent while the session is still open.
    #[schema(value_type = Option<String>, format = "date-time", nullable = true)]
    pub out_time: Option<NaiveDateTime>,
    /// Approved short-leave minutes within the day.
    #[schema(example = 0)]
    pub short_leave_time: i32,
    /// Actual worked minutes, once known.
    #[schema(example = 465, nullable = true)]
    pub total_work_time: Option<i32>,
    #[schema(example = 1)]
    pub status: i8,
}
