//! Axum stand-in for the remote e-learning service.
//!
//! Serves the route table the client targets, with each list endpoint
//! deliberately using a different envelope shape so the normalizer is
//! exercised over real HTTP. Started on a random port per test.

use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use elearn_core::api::endpoints;
use elearn_core::config::VENDOR_TOKEN_HEADER;

pub const VALID_TOKEN: &str = "tok-valid";
pub const ADMIN_TOKEN: &str = "tok-admin";

pub fn course(id: &str) -> Value {
    json!({
        "maKhoaHoc": id,
        "tenKhoaHoc": format!("Course {id}"),
        "moTa": "mock course",
        "maNhom": "GP01",
    })
}

pub fn user(id: &str) -> Value {
    json!({
        "taiKhoan": id,
        "hoTen": format!("User {id}"),
        "email": format!("{id}@example.com"),
        "maLoaiNguoiDung": "HV",
        "maNhom": "GP01",
    })
}

fn vendor_ok(headers: &HeaderMap) -> bool {
    headers.contains_key(VENDOR_TOKEN_HEADER)
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn authorized(headers: &HeaderMap) -> bool {
    matches!(bearer(headers), Some(VALID_TOKEN) | Some(ADMIN_TOKEN))
}

async fn login(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !vendor_ok(&headers) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "vendor token missing" })),
        )
            .into_response();
    }

    let account = body["taiKhoan"].as_str().unwrap_or_default().to_string();
    if body["matKhau"].as_str() == Some("wrong") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "account or password incorrect" })),
        )
            .into_response();
    }

    Json(json!({
        "accessToken": VALID_TOKEN,
        "taiKhoan": account,
        "hoTen": "Mock User",
        "email": format!("{account}@example.com"),
        "maLoaiNguoiDung": "HV",
        "maNhom": "GP01",
    }))
    .into_response()
}

async fn register() -> Json<Value> {
    Json(json!({ "message": "registered" }))
}

async fn current_user(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(user("restored")).into_response()
}

// Bare-array envelope.
async fn course_list(headers: HeaderMap) -> Response {
    if !vendor_ok(&headers) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "vendor token missing" })),
        )
            .into_response();
    }
    Json(json!([course("crs-1"), course("crs-2")])).into_response()
}

// {items, totalCount} envelope.
async fn course_list_paginated() -> Json<Value> {
    Json(json!({
        "currentPage": 1,
        "count": 2,
        "totalCount": 25,
        "items": [course("crs-1"), course("crs-2")],
    }))
}

async fn course_detail() -> Json<Value> {
    Json(course("crs-1"))
}

async fn categories() -> Json<Value> {
    Json(json!([
        { "maDanhMuc": "BackEnd", "tenDanhMuc": "Back end" },
        { "maDanhMuc": "Design", "tenDanhMuc": "Design" },
    ]))
}

// Echoes the created course back, except the "weird" id which answers with a
// bare string the way the live service sometimes does.
async fn course_create(Json(body): Json<Value>) -> Response {
    let kh = body["kh"].clone();
    if kh["maKhoaHoc"].as_str() == Some("weird") {
        return Json(json!("created")).into_response();
    }
    Json(kh).into_response()
}

async fn course_update(Json(body): Json<Value>) -> Json<Value> {
    Json(body["kh"].clone())
}

async fn course_delete() -> &'static str {
    "deleted"
}

// Echoes the multipart text fields as a JSON object plus the uploaded file's
// name and size, so the client's form assembly is observable.
async fn course_upload(mut multipart: Multipart) -> Json<Value> {
    let mut echoed = serde_json::Map::new();

    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(file_name) = field.file_name() {
            echoed.insert("fileName".to_string(), json!(file_name));
            let bytes = field.bytes().await.expect("file bytes");
            echoed.insert("fileSize".to_string(), json!(bytes.len()));
        } else {
            let text = field.text().await.expect("field text");
            echoed.insert(name, json!(text));
        }
    }

    Json(Value::Object(echoed))
}

// {data, total} envelope.
async fn user_list() -> Json<Value> {
    Json(json!({ "data": [user("alice"), user("bob")], "total": 42 }))
}

async fn user_list_paginated() -> Json<Value> {
    Json(json!({ "items": [user("alice")], "totalCount": 7 }))
}

async fn user_types() -> Json<Value> {
    Json(json!([
        { "maLoaiNguoiDung": "HV", "tenLoaiNguoiDung": "Student" },
        { "maLoaiNguoiDung": "GV", "tenLoaiNguoiDung": "Instructor" },
    ]))
}

async fn user_create(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn user_update(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    match bearer(&headers) {
        Some(ADMIN_TOKEN) => Json(body).into_response(),
        Some(_) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "insufficient role" })),
        )
            .into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn user_delete() -> &'static str {
    "deleted"
}

// Per-account enrollment lists: crs-1 is (erroneously) in both.
async fn courses_approved(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([course("crs-1")])).into_response()
}

async fn courses_pending(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([course("crs-1"), course("crs-2")])).into_response()
}

// Per-course rosters; the not-enrolled query is the one that fails.
async fn users_not_enrolled() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "boom" })),
    )
        .into_response()
}

async fn users_pending_for_course() -> Json<Value> {
    Json(json!([user("carol")]))
}

async fn users_approved_for_course() -> Json<Value> {
    Json(json!([user("alice"), user("bob")]))
}

async fn enroll_ok() -> Json<Value> {
    Json(json!("enrolled"))
}

pub fn app() -> Router {
    Router::new()
        .route(endpoints::LOGIN, post(login))
        .route(endpoints::REGISTER, post(register))
        .route(endpoints::CURRENT_USER, post(current_user))
        .route(endpoints::ACCOUNT_INFO, post(current_user))
        .route(endpoints::COURSE_LIST, get(course_list))
        .route(endpoints::COURSE_LIST_PAGINATED, get(course_list_paginated))
        .route(endpoints::COURSE_DETAIL, get(course_detail))
        .route(endpoints::COURSE_CATEGORIES, get(categories))
        .route(endpoints::COURSE_CREATE, post(course_create))
        .route(endpoints::COURSE_UPDATE, put(course_update))
        .route(endpoints::COURSE_DELETE, delete(course_delete))
        .route(endpoints::COURSE_UPLOAD_IMAGE, post(course_upload))
        .route(endpoints::COURSE_UPLOAD_CREATE, post(course_upload))
        .route(endpoints::COURSE_UPLOAD_UPDATE, post(course_upload))
        .route(endpoints::USER_LIST, get(user_list))
        .route(endpoints::USER_LIST_PAGINATED, get(user_list_paginated))
        .route(endpoints::USER_TYPES, get(user_types))
        .route(endpoints::USER_CREATE, post(user_create))
        .route(endpoints::USER_UPDATE, put(user_update))
        .route(endpoints::USER_DELETE, delete(user_delete))
        .route(endpoints::COURSES_APPROVED, post(courses_approved))
        .route(endpoints::COURSES_PENDING_APPROVAL, post(courses_pending))
        .route(endpoints::USERS_NOT_ENROLLED, post(users_not_enrolled))
        .route(
            endpoints::USERS_PENDING_FOR_COURSE,
            post(users_pending_for_course),
        )
        .route(
            endpoints::USERS_APPROVED_FOR_COURSE,
            post(users_approved_for_course),
        )
        .route(endpoints::ENROLL, post(enroll_ok))
        .route(endpoints::ENROLL_APPROVE, post(enroll_ok))
        .route(endpoints::ENROLL_CANCEL, post(enroll_ok))
}

/// Serve the mock on a random local port and return its base URL.
pub async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");

    tokio::spawn(async move {
        axum::serve(listener, app()).await.expect("mock server");
    });

    format!("http://{addr}")
}
