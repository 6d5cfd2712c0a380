//! Client-side state slices.
//!
//! Each slice holds the normalized cache of one remote collection and is
//! mutated only by its own async actions, mirroring the single-threaded UI
//! model: set the loading flag, call the resource client, normalize, store.
//! Errors are recorded on the slice and also returned to the caller.

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod normalize;
pub mod user;

pub use auth::AuthState;
pub use course::CourseState;
pub use enrollment::EnrollmentState;
pub use normalize::{normalize_entity, normalize_list, ListPage};
pub use user::UserState;
