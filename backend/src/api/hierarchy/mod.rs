//! Classification hierarchy and flat category lists.

mod get_resource_hierarchy;
pub use get_resource_hierarchy::get_resource_hierarchy;

mod get_main_categories;
pub use get_main_categories::get_main_categories;

mod load_filter_options;
pub use load_filter_options::load_filter_options;
