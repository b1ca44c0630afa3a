//! Folia is a calm blog reading frontend: a server-rendered listing page
//! with incremental feed loading, a post detail page with session-scoped
//! engagement toggles, and a compiled-in Post Store. No database, no admin
//! surface; the only persisted reader state is the theme cookie.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
