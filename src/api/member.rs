use crate::{
    model::member::Member,
    store,
    utils::db_utils::{build_update_sql, execute_update},
};
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Columns a partial member update may touch.
const MEMBER_UPDATE_COLUMNS: &[&str] = &[
    "name",
    "email",
    "avatar",
    "join_date",
    "end_date",
    "work_time",
    "leave_allowance",
    "status",
];

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateMember {
    #[schema(example = "John Doe", value_type = String)]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "avatars/john.png", value_type = Option<String>, nullable = true)]
    pub avatar: Option<String>,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub join_date: chrono::NaiveDate,
    #[schema(example = "2025-12-31", format = "date", value_type = Option<String>, nullable = true)]
    pub end_date: Option<chrono::NaiveDate>,
    /// Expected daily work time in minutes.
    #[schema(example = 480)]
    pub work_time: i32,
    /// Pre-approved annual leave allowance in days.
    #[serde(default)]
    #[schema(example = 20)]
    pub leave_allowance: i32,
    #[serde(default = "default_status")]
    #[schema(example = 1)]
    pub status: i8,
}

fn default_status() -> i8 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<i8>,
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MemberListResponse {
    #[schema(
    example = json!([{
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "avatar": "avatars/john.png",
        "join_date": "2024-01-01",
        "end_date": null,
        "work_time": 480,
        "leave_allowance": 20,
        "status": 1
    }])
)]
    pub data: Vec<Member>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 42)]
    pub total: i64,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    pub join_date: Option<chrono::NaiveDate>,
    #[schema(example = "2025-12-31", format = "date", value_type = Option<String>)]
    pub end_date: Option<chrono::NaiveDate>,
    pub work_time: Option<i32>,
    pub leave_allowance: Option<i32>,
    pub status: Option<i8>,
}

// Helper enum for typed SQLx binding
enum FilterValue<'a> {
    Int(i64),
    Str(&'a str),
}

/// Create Member
#[utoipa::path(
    post,
    path = "/api/member",
    request_body = CreateMember,
    responses(
        (status = 200, description = "Member created successfully", body = Object, example = json!({
            "message": "Member created successfully",
            "id": 1
        })),
        (status = 400, description = "Email already registered", body = Object, example = json!({
            "message": "A member with this email already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Member"
)]
pub async fn create_member(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateMember>,
) -> impl Responder {
    let result = sqlx::query(
        r#"
        INSERT INTO members
        (name, email, avatar, join_date, end_date, work_time, leave_allowance, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.avatar)
    .bind(payload.join_date)
    .bind(payload.end_date)
    .bind(payload.work_time)
    .bind(payload.leave_allowance)
    .bind(payload.status)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(res) => HttpResponse::Ok().json(json!({
            "message": "Member created successfully",
            "id": res.last_insert_id()
        })),
        Err(e) => {
            // Unique email violation
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return HttpResponse::BadRequest().json(json!({
                        "message": "A member with this email already exists"
                    }));
                }
            }

            error!(error = %e, "Failed to create member");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}

// -------------------- Handler --------------------

#[utoipa::path(
    get,
    path = "/api/member",
    params(
        ("page",  Query, description = "Page number"),
        ("per_page", Query, description = "Items per page"),
        ("status", Query, description = "Filter by status flag"),
        ("search", Query, description = "Search by name or email")
    ),
    responses(
        (status = 200, description = "Paginated member list", body = MemberListResponse)
    ),
    tag = "Member"
)]
pub async fn list_members(
    pool: web::Data<MySqlPool>,
    query: web::Query<MemberQuery>,
) -> actix_web::Result<impl Responder> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * per_page;

    // ---------- build WHERE clause dynamically ----------
    let like = query.search.as_deref().map(|s| format!("%{}%", s));

    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(status) = query.status {
        where_sql.push_str(" AND status = ?");
        args.push(FilterValue::Int(status as i64));
    }

    if let Some(like) = like.as_deref() {
        where_sql.push_str(" AND (name LIKE ? OR email LIKE ?)");
        args.push(FilterValue::Str(like));
        args.push(FilterValue::Str(like));
    }

    // ---------- total count ----------
    let count_sql = format!("SELECT COUNT(*) FROM members{}", where_sql);
    debug!(sql = %count_sql, "Counting members");

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_query = match arg {
            FilterValue::Int(v) => count_query.bind(*v),
            FilterValue::Str(s) => count_query.bind(*s),
        };
    }

    let total = count_query.fetch_one(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, sql = %count_sql, "Failed to count members");
        ErrorInternalServerError("Internal Server Error")
    })?;

    // ---------- data query ----------
    let data_sql = format!(
        "SELECT * FROM members{} ORDER BY id LIMIT ? OFFSET ?",
        where_sql
    );
    debug!(sql = %data_sql, page, per_page, offset, "Fetching members");

    let mut data_query = sqlx::query_as::<_, Member>(&data_sql);
    for arg in &args {
        data_query = match arg {
            FilterValue::Int(v) => data_query.bind(*v),
            FilterValue::Str(s) => data_query.bind(*s),
        };
    }

    let members = data_query
        .bind(per_page as i64)
        .bind(offset as i64)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, sql = %data_sql, "Failed to fetch members");
            ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(MemberListResponse {
        data: members,
        page,
        per_page,
        total,
    }))
}

/// Get Member by ID
#[utoipa::path(
    get,
    path = "/api/member/{member_id}",
    params(
        ("member_id" = u64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member found", body = Member),
        (status = 404, description = "Member not found", body = Object, example = json!({
            "message": "Member not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Member"
)]
pub async fn get_member(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let member_id = path.into_inner();

    let member = store::find_member(pool.get_ref(), member_id)
        .await
        .map_err(|e| {
            error!(error = %e, member_id, "Failed to fetch member");
            ErrorInternalServerError("Internal Server Error")
        })?;

    match member {
        Some(member) => Ok(HttpResponse::Ok().json(member)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "Member not found"
        }))),
    }
}

/// Update Member
#[utoipa::path(
    put,
    path = "/api/member/{member_id}",
    params(
        ("member_id" = u64, Path, description = "Member ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated successfully", body = Object, example = json!({
            "message": "Member updated successfully"
        })),
        (status = 400, description = "Unknown field or duplicate email"),
        (status = 404, description = "Member not found", body = Object, example = json!({
            "message": "Member not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Member"
)]
pub async fn update_member(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    body: web::Json<Value>,
) -> actix_web::Result<impl Responder> {
    let member_id = path.into_inner();

    let update = build_update_sql("members", &body, MEMBER_UPDATE_COLUMNS, "id", member_id)?;

    let affected = match execute_update(pool.get_ref(), update).await {
        Ok(affected) => affected,
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some("23000") {
                    return Ok(HttpResponse::BadRequest().json(json!({
                        "message": "A member with this email already exists"
                    })));
                }
            }
            error!(error = %e, member_id, "Failed to update member");
            return Err(ErrorInternalServerError("Internal Server Error"));
        }
    };

    if affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Member not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Member updated successfully"
    })))
}

/// Delete Member
#[utoipa::path(
    delete,
    path = "/api/member/{member_id}",
    params(
        ("member_id" = u64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member deleted successfully", body = Object, example = json!({
            "message": "Member deleted successfully"
        })),
        (status = 404, description = "Member not found", body = Object, example = json!({
            "message": "Member not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Member"
)]
pub async fn delete_member(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let member_id = path.into_inner();

    let result = sqlx::query("DELETE FROM members WHERE id = ?")
        .bind(member_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() == 0 {
                return Ok(HttpResponse::NotFound().json(json!({
                    "message": "Member not found"
                })));
            }

            Ok(HttpResponse::Ok().json(json!({
                "message": "Member deleted successfully"
            })))
        }

        Err(e) => {
            error!(error = %e, member_id, "Failed to delete member");

            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}
