//! Server services
//!
//! - [`HttpsService`] - router cache and HTTP listener

pub mod https;

pub use https::HttpsService;
