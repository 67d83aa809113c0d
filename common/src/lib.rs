//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod error;
pub mod serde_helpers;
pub mod field_path;
pub mod resource;
pub mod catalog_api;
pub mod hierarchy;
pub mod selection;
pub mod result_filter;
pub mod results_table;
pub mod resource_detail;
pub mod chat;
pub mod chat_reply;
pub mod network;
pub mod ui_state;
