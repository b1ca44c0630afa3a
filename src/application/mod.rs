//! Application services layer.

pub mod chrome;
pub mod detail;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod pagination;
pub mod repos;
pub mod stream;
