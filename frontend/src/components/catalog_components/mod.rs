//! Filter sidebar, hierarchy tree and result tables of the catalog page.

pub mod active_filter_tags;
pub mod category_checkboxes;
pub mod filter_options_panel;
pub mod hierarchy_tree;
pub mod resource_search_box;
pub mod results_tables;
