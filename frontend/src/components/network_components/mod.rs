pub mod network_panel;
