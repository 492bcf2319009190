use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "avatar": "https://cdn.example.com/avatars/1.png",
        "join_date": "2024-06-15",
        "end_date": null,
        "work_time": 480,
        "leave_allowance": 20,
        "status": 1
    })
)]
pub struct Member {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "https://cdn.example.com/avatars/1.png", nullable = true)]
    pub avatar: Option<String>,

    /// Lower bound for any attendance computation.
    #[schema(example = "2024-06-15", value_type = String, format = "date")]
    pub join_date: NaiveDate,

    /// Upper bound for attendance eligibility when present.
    #[schema(value_type = Option<String>, format = "date", nullable = true)]
    pub end_date: Option<NaiveDate>,

    /// Expected daily work minutes; 0 is treated as 1 wherever it divides.
    #[schema(example = 480)]
    pub work_time: i32,

    /// Pre-approved annual leave allowance, reported but never subtracted
    /// from computed leave days.
    #[schema(example = 20)]
    pub leave_allowance: i32,

    /// 1 = active; the fleet report only covers active members.
    #[schema(example = 1)]
    pub status: i8,
}
