pub mod compose_adapter;
pub mod config;

pub use compose_adapter::ComposeAdapter;
pub use config::{Settings, SettingsOverrides};
