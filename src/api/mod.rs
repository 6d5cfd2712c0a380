//! Resource clients, one method per remote operation.
//!
//! Inputs are plain parameter structs, outputs are the remote's JSON bodies
//! untouched; the store layer owns normalization. Failures are the adapter's
//! errors, propagated unmodified.

mod auth;
mod course;
mod enrollment;
mod user;

pub use auth::AuthApi;
pub use course::CourseApi;
pub use enrollment::EnrollmentApi;
pub use user::UserApi;

/// The remote service's fixed route table.
pub mod endpoints {
    pub const LOGIN: &str = "/api/QuanLyNguoiDung/DangNhap";
    pub const REGISTER: &str = "/api/QuanLyNguoiDung/DangKy";
    pub const CURRENT_USER: &str = "/api/QuanLyNguoiDung/ThongTinNguoiDung";
    pub const ACCOUNT_INFO: &str = "/api/QuanLyNguoiDung/ThongTinTaiKhoan";

    pub const COURSE_LIST: &str = "/api/QuanLyKhoaHoc/LayDanhSachKhoaHoc";
    pub const COURSE_LIST_PAGINATED: &str = "/api/QuanLyKhoaHoc/LayDanhSachKhoaHoc_PhanTrang";
    pub const COURSE_BY_CATEGORY: &str = "/api/QuanLyKhoaHoc/LayKhoaHocTheoDanhMuc";
    pub const COURSE_CATEGORIES: &str = "/api/QuanLyKhoaHoc/LayDanhMucKhoaHoc";
    pub const COURSE_DETAIL: &str = "/api/QuanLyKhoaHoc/LayThongTinKhoaHoc";
    pub const COURSE_CREATE: &str = "/api/QuanLyKhoaHoc/ThemKhoaHoc";
    pub const COURSE_UPDATE: &str = "/api/QuanLyKhoaHoc/CapNhatKhoaHoc";
    pub const COURSE_DELETE: &str = "/api/QuanLyKhoaHoc/XoaKhoaHoc";
    pub const COURSE_UPLOAD_IMAGE: &str = "/api/QuanLyKhoaHoc/UploadHinhAnhKhoaHoc";
    pub const COURSE_UPLOAD_CREATE: &str = "/api/QuanLyKhoaHoc/ThemKhoaHocUploadHinh";
    pub const COURSE_UPLOAD_UPDATE: &str = "/api/QuanLyKhoaHoc/CapNhatKhoaHocUpload";

    pub const ENROLL: &str = "/api/QuanLyKhoaHoc/DangKyKhoaHoc";
    pub const ENROLL_APPROVE: &str = "/api/QuanLyKhoaHoc/GhiDanhKhoaHoc";
    pub const ENROLL_CANCEL: &str = "/api/QuanLyKhoaHoc/HuyGhiDanh";

    pub const USER_LIST: &str = "/api/QuanLyNguoiDung/LayDanhSachNguoiDung";
    pub const USER_LIST_PAGINATED: &str = "/api/QuanLyNguoiDung/LayDanhSachNguoiDung_PhanTrang";
    pub const USER_SEARCH: &str = "/api/QuanLyNguoiDung/TimKiemNguoiDung";
    pub const USER_TYPES: &str = "/api/QuanLyNguoiDung/LayDanhSachLoaiNguoiDung";
    pub const USER_CREATE: &str = "/api/QuanLyNguoiDung/ThemNguoiDung";
    pub const USER_UPDATE: &str = "/api/QuanLyNguoiDung/CapNhatThongTinNguoiDung";
    pub const USER_DELETE: &str = "/api/QuanLyNguoiDung/XoaNguoiDung";

    pub const COURSES_NOT_ENROLLED: &str = "/api/QuanLyNguoiDung/LayDanhSachKhoaHocChuaGhiDanh";
    pub const COURSES_PENDING_APPROVAL: &str =
        "/api/QuanLyNguoiDung/LayDanhSachKhoaHocChoXetDuyet";
    pub const COURSES_APPROVED: &str = "/api/QuanLyNguoiDung/LayDanhSachKhoaHocDaXetDuyet";
    pub const USERS_NOT_ENROLLED: &str = "/api/QuanLyNguoiDung/LayDanhSachNguoiDungChuaGhiDanh";
    pub const USERS_PENDING_FOR_COURSE: &str =
        "/api/QuanLyNguoiDung/LayDanhSachHocVienChoXetDuyet";
    pub const USERS_APPROVED_FOR_COURSE: &str = "/api/QuanLyNguoiDung/LayDanhSachHocVienKhoaHoc";
}
