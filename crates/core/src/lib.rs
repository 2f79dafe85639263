pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod services;

pub use client::TaskClient;
pub use config::AppConfig;
pub use error::ClientError;
pub use model::*;
pub use services::TaskService;
