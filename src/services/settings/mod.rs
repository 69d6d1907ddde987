// Settings service exports

mod service;

pub use service::SettingsService;
