use serde::{Deserialize, Serialize};

// Entities mirror the remote service's wire field names; the natural keys
// are `taiKhoan` for accounts and `maKhoaHoc` for courses.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthUser {
    #[serde(rename = "taiKhoan")]
    pub account_id: String,
    #[serde(rename = "hoTen")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "soDT", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "maLoaiNguoiDung", skip_serializing_if = "Option::is_none")]
    pub user_type_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "maNhom", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Course {
    #[serde(rename = "maKhoaHoc")]
    pub course_id: String,
    #[serde(rename = "biDanh", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(rename = "tenKhoaHoc")]
    pub title: String,
    #[serde(rename = "moTa", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "hinhAnh", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "luotXem", skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(rename = "danhGia", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "maNhom", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(rename = "ngayTao", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "maDanhMucKhoaHoc", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(rename = "taiKhoanNguoiTao", skip_serializing_if = "Option::is_none")]
    pub creator_account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(rename = "taiKhoan")]
    pub account_id: String,
    #[serde(rename = "hoTen")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "soDT", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "maLoaiNguoiDung", skip_serializing_if = "Option::is_none")]
    pub user_type_code: Option<String>,
    #[serde(rename = "maNhom", skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    /// Only sent on create/update; the remote never echoes it back.
    #[serde(rename = "matKhau", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "maDanhMuc")]
    pub category_id: String,
    #[serde(rename = "tenDanhMuc")]
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserType {
    #[serde(rename = "maLoaiNguoiDung")]
    pub code: String,
    #[serde(rename = "tenLoaiNguoiDung")]
    pub name: String,
}

/// Enrollment of one account in one course, as the remote reports it per
/// course-roster query. Not persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStatus {
    NotEnrolled,
    Pending,
    Approved,
}
