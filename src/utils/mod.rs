//! Utility modules for the content resolution engine.

pub mod slug;
