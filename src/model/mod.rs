pub mod dtos;
pub mod structs;

pub use dtos::*;
pub use structs::*;
