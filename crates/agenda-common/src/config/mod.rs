//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BookingConfig, ConfigError, DatabaseConfig, Environment,
    HolidaysConfig,
};
