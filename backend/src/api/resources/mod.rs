//! Resource listing, lookup and type-ahead endpoints.

mod filter_resources;
pub use filter_resources::filter_resources;

mod get_resource;
pub use get_resource::get_resource;

mod search_resources;
pub use search_resources::search_resources;
