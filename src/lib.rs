pub mod charts;
pub mod chat;
pub mod config;
pub mod ui;
