pub mod content;
pub mod platform;
pub mod settings;
