pub mod chat_panel;
pub mod chat_reply_view;
