pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use lifeos_core as core;
pub use lifeos_core::client;
pub use lifeos_core::model;

pub use lifeos_core::AppConfig;
pub use tui::View;
