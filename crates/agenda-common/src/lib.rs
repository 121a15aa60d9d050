//! # agenda-common
//!
//! Shared utilities including configuration, error handling, the holiday
//! calendar, and telemetry.

pub mod config;
pub mod error;
pub mod holidays;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, BookingConfig, ConfigError, DatabaseConfig, Environment,
    HolidaysConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use holidays::FixedHolidayCalendar;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
