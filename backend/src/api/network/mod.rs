mod get_network_data;
pub use get_network_data::get_network_data;
