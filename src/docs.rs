use crate::api::attendance::{FleetReportResponse, MonthReportResponse, YearReportResponse};
use crate::api::member::{CreateMember, MemberListResponse, MemberQuery, UpdateMember};
use crate::api::report::{
    CreateReport, CreateReportBatch, MemberReportsResponse, ReportFilter, ReportListResponse,
};
use crate::model::member::Member;
use crate::model::report::Report;
use crate::summary::monthly::MonthSummary;
use crate::summary::reconcile::DailyRecord;
use crate::summary::yearly::{MemberYearSummary, YearSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracking API",
        version = "1.0.0",
        description = r#"
## Attendance Tracking System

This API manages a **member roster** with their **daily time-clock reports** and computes attendance summaries from them.

### 🔹 Key Features
- **Member Management**
  - Create, update, list, and view members of the roster
- **Report Ingestion**
  - Batch-import daily time-clock reports, one row per member per date
- **Attendance Summaries**
  - Month reports with day-by-day records, implicit absences included
  - Year reports with a month-by-month breakdown
  - Fleet-wide yearly roll-up across all active members

### 📐 Computation Rules
- Eligible windows are bounded by **join date**, **end date**, and **last recorded activity**
- Days without a report inside the window count as **leave**
- Clock-time averages are taken on the **time of day**, so stamps from different dates average correctly

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::member::create_member,
        crate::api::member::list_members,
        crate::api::member::get_member,
        crate::api::member::update_member,
        crate::api::member::delete_member,

        crate::api::report::create_reports,
        crate::api::report::list_reports,
        crate::api::report::get_report,
        crate::api::report::update_report,
        crate::api::report::delete_report,
        crate::api::report::member_reports,

        crate::api::attendance::month_report,
        crate::api::attendance::year_report,
        crate::api::attendance::fleet_report
    ),
    components(
        schemas(
            Member,
            Report,
            CreateMember,
            UpdateMember,
            MemberQuery,
            MemberListResponse,
            CreateReport,
            CreateReportBatch,
            ReportFilter,
            ReportListResponse,
            MemberReportsResponse,
            DailyRecord,
            MonthSummary,
            YearSummary,
            MemberYearSummary,
            MonthReportResponse,
            YearReportResponse,
            FleetReportResponse
        )
    ),
    tags(
        (name = "Member", description = "Member roster APIs"),
        (name = "Report", description = "Daily report APIs"),
        (name = "Attendance", description = "Attendance summary APIs"),
    )
)]
pub struct ApiDoc;
