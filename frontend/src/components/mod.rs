pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod catalog_components;
pub mod detail_components;
pub mod chat_components;
pub mod network_components;
