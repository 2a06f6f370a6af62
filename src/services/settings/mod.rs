// Settings service module
// Loads and stores layout settings as TOML

pub mod service;

pub use service::SettingsService;
