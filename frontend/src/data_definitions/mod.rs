pub mod ui_state_control;
pub mod url_param;
