pub mod config;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use config::{Environment, LlmProvider, Settings, SettingsError};
pub use router::create_router;
pub use state::AppState;

pub const SERVICE_NAME: &str = "Jarvis External Models API";
