//! Server-side access to the catalog REST service.

pub mod api;
pub mod config;
pub mod http_utils;
