mod ai_chat;
pub use ai_chat::ai_chat;
