use crate::{model::member::Member, model::report::Report, store};
use crate::utils::db_utils::{build_update_sql, execute_update};
use actix_web::{HttpResponse, Responder, web};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

/// Columns a partial report update may touch.
const REPORT_UPDATE_COLUMNS: &[&str] = &[
    "member_id",
    "date",
    "work_time",
    "in_time",
    "out_time",
    "short_leave_time",
    "total_work_time",
    "status",
];

/// Time-clock exports use "2024-01-05 09:12:44" while serde's chrono
/// support only takes the ISO "T" form; accept both on the way in.
mod clock_stamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, de::Error};

    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    fn parse(s: &str) -> Option<NaiveDateTime> {
        FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| Error::custom(format!("invalid datetime: {}", s)))
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;
        opt.map(|s| parse(&s).ok_or_else(|| Error::custom(format!("invalid datetime: {}", s))))
            .transpose()
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateReport {
    #[schema(example = 1)]
    pub member_id: u64,
    #[schema(example = "2024-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// Planned minutes for the day.
    #[schema(example = 480)]
    pub work_time: i32,
    #[serde(deserialize_with = "clock_stamp::deserialize")]
    #[schema(example = "2024-01-05 09:12:44", value_type = String)]
    pub in_time: NaiveDateTime,
    #[serde(default, deserialize_with = "clock_stamp::deserialize_opt")]
    #[schema(example = "2024-01-05 18:03:10", value_type = Option<String>, nullable = true)]
    pub out_time: Option<NaiveDateTime>,
    #[serde(default)]
    #[schema(example = 30)]
    pub short_leave_time: i32,
    /// Actual worked minutes, when the device already computed them.
    #[serde(default)]
    #[schema(example = 505, value_type = Option<i32>, nullable = true)]
    pub total_work_time: Option<i32>,
    #[serde(default = "default_status")]
    #[schema(example = 1)]
    pub status: i8,
}

fn default_status() -> i8 {
    1
}

#[derive(Deserialize, ToSchema)]
pub struct CreateReportBatch {
    #[schema(example = json!([{
        "member_id": 1,
        "date": "2024-01-05",
        "work_time": 480,
        "in_time": "2024-01-05 09:12:44",
        "out_time": "2024-01-05 18:03:10",
        "short_leave_time": 0,
        "total_work_time": 505,
        "status": 1
    }]))]
    pub data: Vec<CreateReport>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ReportFilter {
    #[schema(example = 1)]
    /// Filter by member ID
    pub member_id: Option<u64>,
    #[schema(example = "2024-01-01")]
    /// Only reports on or after this date
    pub from: Option<NaiveDate>,
    #[schema(example = "2024-01-31")]
    /// Only reports on or before this date
    pub to: Option<NaiveDate>,
    #[schema(example = 1)]
    /// Pagination page number (start with 1)
    pub page: Option<u64>,
    #[schema(example = 20)]
    /// Pagination per page number
    pub per_page: Option<u64>,
}

// Helper enum for typed SQLx binding
enum FilterValue {
    U64(u64),
    Date(NaiveDate),
}

#[derive(Serialize, ToSchema)]
pub struct ReportListResponse {
    #[schema(example = json!([{
        "id": 10,
        "member_id": 1,
        "date": "2024-01-05",
        "work_time": 480,
        "in_time": "2024-01-05T09:12:44",
        "out_time": "2024-01-05T18:03:10",
        "short_leave_time": 0,
        "total_work_time": 505,
        "status": 1
    }]))]
    pub data: Vec<Report>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 250)]
    pub total: i64,
}

#[derive(Serialize, ToSchema)]
pub struct MemberReportsResponse {
    pub member: Member,
    pub reports: Vec<Report>,
}

/* =========================
Batch-create reports
========================= */
/// One transaction per batch: either every row of a device export lands
/// or none does.
#[utoipa::path(
    post,
    path = "/api/report",
    request_body(
        content = CreateReportBatch,
        description = "Batch of daily reports, usually one device export",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Reports created successfully", body = Object, example = json!({
            "message": "Reports created successfully",
            "ids": [10, 11, 12]
        })),
        (status = 400, description = "Unknown member or duplicate report date", body = Object, example = json!({
            "message": "Unknown member or duplicate report date"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn create_reports(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateReportBatch>,
) -> actix_web::Result<impl Responder> {
    if payload.data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "data must be a non-empty array"
        })));
    }

    let mut tx = pool.begin().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to open transaction");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let mut ids = Vec::with_capacity(payload.data.len());

    for report in &payload.data {
        let result = sqlx::query(
            r#"
            INSERT INTO reports
                (member_id, date, work_time, in_time, out_time, short_leave_time, total_work_time, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(report.member_id)
        .bind(report.date)
        .bind(report.work_time)
        .bind(report.in_time)
        .bind(report.out_time)
        .bind(report.short_leave_time)
        .bind(report.total_work_time)
        .bind(report.status)
        .execute(&mut *tx)
        .await;

        match result {
            Ok(res) => ids.push(res.last_insert_id()),
            Err(e) => {
                // dropping tx rolls the whole batch back
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.code().as_deref() == Some("23000") {
                        return Ok(HttpResponse::BadRequest().json(json!({
                            "message": "Unknown member or duplicate report date"
                        })));
                    }
                }

                tracing::error!(error = %e, member_id = report.member_id, date = %report.date, "Failed to insert report");
                return Err(actix_web::error::ErrorInternalServerError(
                    "Internal Server Error",
                ));
            }
        }
    }

    tx.commit().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to commit report batch");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Reports created successfully",
        "ids": ids
    })))
}

/* =========================
List reports
========================= */
#[utoipa::path(
    get,
    path = "/api/report",
    params(ReportFilter),
    responses(
        (status = 200, description = "Paginated report list", body = ReportListResponse)
    ),
    tag = "Report"
)]
pub async fn list_reports(
    pool: web::Data<MySqlPool>,
    query: web::Query<ReportFilter>,
) -> actix_web::Result<impl Responder> {
    // -------------------------
    // Pagination
    // -------------------------
    let per_page = query.per_page.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    // -------------------------
    // WHERE clause
    // -------------------------
    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(member_id) = query.member_id {
        where_sql.push_str(" AND member_id = ?");
        args.push(FilterValue::U64(member_id));
    }

    if let Some(from) = query.from {
        where_sql.push_str(" AND date >= ?");
        args.push(FilterValue::Date(from));
    }

    if let Some(to) = query.to {
        where_sql.push_str(" AND date <= ?");
        args.push(FilterValue::Date(to));
    }

    // -------------------------
    // COUNT query
    // -------------------------
    let count_sql = format!("SELECT COUNT(*) FROM reports{}", where_sql);

    let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_q = match arg {
            FilterValue::U64(v) => count_q.bind(*v),
            FilterValue::Date(d) => count_q.bind(*d),
        };
    }

    let total = count_q.fetch_one(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to count reports");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    // -------------------------
    // DATA query
    // -------------------------
    let data_sql = format!(
        "SELECT * FROM reports{} ORDER BY date DESC, id DESC LIMIT ? OFFSET ?",
        where_sql
    );

    let mut data_q = sqlx::query_as::<_, Report>(&data_sql);
    for arg in args {
        data_q = match arg {
            FilterValue::U64(v) => data_q.bind(v),
            FilterValue::Date(d) => data_q.bind(d),
        };
    }

    let reports = data_q
        .bind(per_page)
        .bind(offset)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch report list");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    // -------------------------
    // Response
    // -------------------------
    let response = ReportListResponse {
        data: reports,
        page: page as u32,
        per_page: per_page as u32,
        total,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Get Report by ID
#[utoipa::path(
    get,
    path = "/api/report/{report_id}",
    params(
        ("report_id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = Report),
        (status = 404, description = "Report not found", body = Object, example = json!({
            "message": "Report not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn get_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let report_id = path.into_inner();

    let report = sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = ?")
        .bind(report_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, report_id, "Failed to fetch report");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    match report {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "Report not found"
        }))),
    }
}

/// Update Report
#[utoipa::path(
    put,
    path = "/api/report/{report_id}",
    params(
        ("report_id" = u64, Path, description = "Report ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Report updated successfully", body = Object, example = json!({
            "message": "Report updated successfully"
        })),
        (status = 400, description = "Unknown field or conflicting member/date"),
        (status = 404, description = "Report not found", body = Object, example = json!({
            "message": "Report not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn update_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let report_id = path.into_inner();

    let update = build_update_sql("reports", &body, REPORT_UPDATE_COLUMNS, "id", report_id)?;

    let affected = match execute_update(pool.get_ref(), update).await {
        Ok(affected) => affected,
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::BadRequest().json(json!({
                        "message": "Unknown member or duplicate report date"
                    })));
                }
            }
            tracing::error!(error = %e, report_id, "Failed to update report");
            return Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ));
        }
    };

    if affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Report not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Report updated successfully"
    })))
}

/// Delete Report
#[utoipa::path(
    delete,
    path = "/api/report/{report_id}",
    params(
        ("report_id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted successfully", body = Object, example = json!({
            "message": "Report deleted successfully"
        })),
        (status = 404, description = "Report not found", body = Object, example = json!({
            "message": "Report not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn delete_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let report_id = path.into_inner();

    let result = sqlx::query("DELETE FROM reports WHERE id = ?")
        .bind(report_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, report_id, "Failed to delete report");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Report not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Report deleted successfully"
    })))
}

/* =========================
Raw reports of one member
========================= */
#[utoipa::path(
    get,
    path = "/api/member/{member_id}/reports",
    params(
        ("member_id" = u64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member with all recorded reports", body = MemberReportsResponse),
        (status = 404, description = "Member missing or has no reports", body = Object, example = json!({
            "message": "No reports found for this member"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn member_reports(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let member_id = path.into_inner();

    let member = store::find_member(pool.get_ref(), member_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, member_id, "Failed to fetch member");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    let Some(member) = member else {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Member not found"
        })));
    };

    let reports =
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE member_id = ? ORDER BY date")
            .bind(member_id)
            .fetch_all(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, member_id, "Failed to fetch member reports");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

    if reports.is_empty() {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "No reports found for this member"
        })));
    }

    Ok(HttpResponse::Ok().json(MemberReportsResponse { member, reports }))
}
