pub use lifeos_tui::cli;
pub use lifeos_tui::commands;
pub use lifeos_tui::config;
pub use lifeos_tui::logging;
pub use lifeos_tui::tui;
pub use lifeos_tui::AppConfig;
pub use lifeos_tui::View;

pub use lifeos_core as core;
pub use lifeos_core::client;
pub use lifeos_core::model;
