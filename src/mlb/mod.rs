//! MLB stats API and encyclopedia API clients.

pub mod feed;
pub mod http;
pub mod types;
pub mod wiki;

pub use http::MlbClient;
