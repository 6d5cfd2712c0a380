pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

pub use reqwest::Client;
pub use tokio;
