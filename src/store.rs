use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::model::member::Member;
use crate::model::report::Report;
use crate::summary::calendar;

const SCHEMA_MEMBERS: &str = "CREATE TABLE IF NOT EXISTS members (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    avatar VARCHAR(255) NULL,
    join_date DATE NOT NULL,
    end_date DATE NULL,
    work_time INT NOT NULL,
    leave_allowance INT NOT NULL DEFAULT 0,
    status TINYINT NOT NULL DEFAULT 1,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
)";

// UNIQUE (member_id, date) enforces one report per member per day; the
// batch insert surfaces violations as a 400.
const SCHEMA_REPORTS: &str = "CREATE TABLE IF NOT EXISTS reports (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    member_id BIGINT UNSIGNED NOT NULL,
    date DATE NOT NULL,
    work_time INT NOT NULL,
    in_time DATETIME NOT NULL,
    out_time DATETIME NULL,
    short_leave_time INT NOT NULL DEFAULT 0,
    total_work_time INT NULL,
    status TINYINT NOT NULL DEFAULT 1,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
    UNIQUE KEY uq_reports_member_date (member_id, date),
    CONSTRAINT fk_reports_member FOREIGN KEY (member_id)
        REFERENCES members (id) ON DELETE CASCADE
)";

const MEMBER_COLUMNS: &str =
    "id, name, email, avatar, join_date, end_date, work_time, leave_allowance, status";

const REPORT_COLUMNS: &str =
    "id, member_id, date, work_time, in_time, out_time, short_leave_time, total_work_time, status";

pub async fn init_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA_MEMBERS).execute(pool).await?;
    sqlx::query(SCHEMA_REPORTS).execute(pool).await?;
    Ok(())
}

pub async fn find_member(pool: &MySqlPool, id: u64) -> Result<Option<Member>, sqlx::Error> {
    let sql = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?");
    sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Active members in enumeration order; the fleet report's scatter order
/// and therefore its output order.
pub async fn list_active_members(pool: &MySqlPool) -> Result<Vec<Member>, sqlx::Error> {
    let sql = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE status = 1 ORDER BY id");
    sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await
}

pub async fn reports_in_range(
    pool: &MySqlPool,
    member_id: u64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Report>, sqlx::Error> {
    let sql = format!(
        "SELECT {REPORT_COLUMNS} FROM reports
         WHERE member_id = ? AND date BETWEEN ? AND ?
         ORDER BY date"
    );
    sqlx::query_as::<_, Report>(&sql)
        .bind(member_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
}

/// Latest report date a member has inside a year, if any.
pub async fn latest_report_date(
    pool: &MySqlPool,
    member_id: u64,
    year: i32,
) -> Result<Option<NaiveDate>, sqlx::Error> {
    let Some((start, end)) = calendar::year_bounds(year) else {
        return Ok(None);
    };
    sqlx::query_scalar::<_, Option<NaiveDate>>(
        "SELECT MAX(date) FROM reports WHERE member_id = ? AND date BETWEEN ? AND ?",
    )
    .bind(member_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}
