use serde::Serialize;

/// Login accepts either an account id or an email as the identifier; the
/// auth client coalesces them into the wire payload.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub account_id: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "taiKhoan")]
    pub account_id: String,
    #[serde(rename = "matKhau")]
    pub password: String,
    #[serde(rename = "hoTen")]
    pub display_name: String,
    #[serde(rename = "soDT")]
    pub phone: String,
    #[serde(rename = "maNhom")]
    pub group_code: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseListParams {
    #[serde(rename = "tenKhoaHoc", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "MaNhom", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(rename = "maDanhMuc", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserListParams {
    #[serde(rename = "MaNhom", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(rename = "tuKhoa", skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// The (course, account) pair every enrollment action operates on.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentPayload {
    #[serde(rename = "maKhoaHoc")]
    pub course_id: String,
    #[serde(rename = "taiKhoan")]
    pub account_id: String,
}
