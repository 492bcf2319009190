use crate::{
    model::member::Member,
    store,
    summary::calendar::parse_month,
    summary::monthly::{MonthSummary, aggregate_month},
    summary::range::{resolve_month_range, resolve_range},
    summary::reconcile::{DailyRecord, reconcile},
    summary::yearly::{
        MemberYearSummary, YearSummary, active_month_summaries, aggregate_year,
        member_year_summary,
    },
};
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use futures::future::try_join_all;
use serde::Serialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::ToSchema;

fn valid_year(year: i32) -> bool {
    (1000..=9999).contains(&year)
}

#[derive(Serialize, ToSchema)]
pub struct MonthReportResponse {
    pub member: Member,
    pub month_summary: MonthSummary,
    /// One entry per eligible day of the month, absences included.
    pub reports: Vec<DailyRecord>,
}

#[derive(Serialize, ToSchema)]
pub struct YearReportResponse {
    pub member: Member,
    pub year_summary: YearSummary,
    /// Months with recorded activity only.
    pub monthly_summary: Vec<MonthSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct FleetReportResponse {
    #[schema(example = 2024)]
    pub year: i32,
    /// One row per active member, in member id order.
    pub data: Vec<MemberYearSummary>,
}

/* =========================
Month report for one member
========================= */
/// Reconciles the member's reports against the calendar month (clipped by
/// join and end dates) and summarizes presence, leave and work time.
#[utoipa::path(
    get,
    path = "/api/member/{member_id}/attendance/{year}/{month}",
    params(
        ("member_id" = u64, Path, description = "Member ID"),
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = String, Path, description = "Month name (January..December) or number (1..12)")
    ),
    responses(
        (status = 200, description = "Month summary with day-by-day records", body = MonthReportResponse),
        (status = 400, description = "Invalid year or month", body = Object, example = json!({
            "error": "Invalid month name."
        })),
        (status = 404, description = "Member not found", body = Object, example = json!({
            "message": "Member not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn month_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<(u64, i32, String)>,
) -> actix_web::Result<impl Responder> {
    let (member_id, year, month_input) = path.into_inner();

    if !valid_year(year) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Invalid year format. Use YYYY (e.g., 2024)."
        })));
    }

    let Some(month) = parse_month(&month_input) else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Invalid month name."
        })));
    };

    let member = store::find_member(pool.get_ref(), member_id)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, "Failed to fetch member");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let Some(member) = member else {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Member not found"
        })));
    };

    // A month fully outside the membership window is an empty summary,
    // not an error.
    let Some(window) = resolve_month_range(member.join_date, member.end_date, year, month) else {
        return Ok(HttpResponse::Ok().json(MonthReportResponse {
            month_summary: aggregate_month(year, month, &[]),
            reports: Vec::new(),
            member,
        }));
    };

    let reports = store::reports_in_range(pool.get_ref(), member_id, window.start, window.end)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, year, month, "Failed to fetch reports for month");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let records = reconcile(&reports, &window);
    let month_summary = aggregate_month(year, month, &records);

    Ok(HttpResponse::Ok().json(MonthReportResponse {
        member,
        month_summary,
        reports: records,
    }))
}

/* =========================
Year report for one member
========================= */
/// Month-by-month breakdown of the year plus a roll-up. Only months with
/// recorded activity are listed; a year without any reports is a 404.
#[utoipa::path(
    get,
    path = "/api/member/{member_id}/attendance/{year}",
    params(
        ("member_id" = u64, Path, description = "Member ID"),
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Year summary with monthly breakdown", body = YearReportResponse),
        (status = 400, description = "Invalid year", body = Object, example = json!({
            "error": "Invalid year format. Use YYYY (e.g., 2024)."
        })),
        (status = 404, description = "Member missing or no reports in the year", body = Object, example = json!({
            "message": "No reports found for this member in the specified year"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn year_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<(u64, i32)>,
) -> actix_web::Result<impl Responder> {
    let (member_id, year) = path.into_inner();

    if !valid_year(year) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Invalid year format. Use YYYY (e.g., 2024)."
        })));
    }

    let member = store::find_member(pool.get_ref(), member_id)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, "Failed to fetch member");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let Some(member) = member else {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Member not found"
        })));
    };

    let last_activity = store::latest_report_date(pool.get_ref(), member_id, year)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, year, "Failed to resolve latest report date");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let Some(last_activity) = last_activity else {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "No reports found for this member in the specified year"
        })));
    };

    // Activity only before the join date (or after the end date) leaves
    // no eligible days; answer with zeros rather than fail.
    let Some(window) = resolve_range(member.join_date, member.end_date, year, Some(last_activity))
    else {
        return Ok(HttpResponse::Ok().json(YearReportResponse {
            year_summary: aggregate_year(year, &[]),
            monthly_summary: Vec::new(),
            member,
        }));
    };

    let reports = store::reports_in_range(pool.get_ref(), member_id, window.start, window.end)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, year, "Failed to fetch reports for year");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let records = reconcile(&reports, &window);
    let monthly_summary = active_month_summaries(year, &window, &records);
    let year_summary = aggregate_year(year, &monthly_summary);

    Ok(HttpResponse::Ok().json(YearReportResponse {
        member,
        year_summary,
        monthly_summary,
    }))
}

// One fleet row: latest activity bounds the member's window, the window
// bounds the report fetch, the pure pipeline does the rest.
async fn member_year_row(
    pool: &MySqlPool,
    member: Member,
    year: i32,
) -> Result<MemberYearSummary, sqlx::Error> {
    let last_activity = store::latest_report_date(pool, member.id, year).await?;

    let window = last_activity
        .and_then(|last| resolve_range(member.join_date, member.end_date, year, Some(last)));

    let reports = match window {
        Some(window) => store::reports_in_range(pool, member.id, window.start, window.end).await?,
        None => Vec::new(),
    };

    Ok(member_year_summary(&member, year, &reports, last_activity))
}

/* =========================
Fleet-wide year report
========================= */
/// Runs the per-member yearly pipeline for every active member and gathers
/// the rows in member id order.
#[utoipa::path(
    get,
    path = "/api/attendance/{year}",
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Yearly roll-up for all active members", body = FleetReportResponse),
        (status = 400, description = "Invalid year", body = Object, example = json!({
            "error": "Invalid year format. Use YYYY (e.g., 2024)."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn fleet_report(
    pool: web::Data<MySqlPool>,
    path: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    let year = path.into_inner();

    if !valid_year(year) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Invalid year format. Use YYYY (e.g., 2024)."
        })));
    }

    let members = store::list_active_members(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to list active members");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let rows = try_join_all(
        members
            .into_iter()
            .map(|member| member_year_row(pool.get_ref(), member, year)),
    )
    .await
    .map_err(|e| {
        error!(error = %e, year, "Failed to build fleet report");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(FleetReportResponse { year, data: rows }))
}
