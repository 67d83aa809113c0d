//! One function per catalog endpoint.

pub mod chat;
pub mod hierarchy;
pub mod network;
pub mod resources;
