pub mod home_page;
pub mod catalog_page;
pub mod resource_page;
pub mod chat_page;
pub mod network_page;
