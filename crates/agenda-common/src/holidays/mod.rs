//! Recognized-holiday calendar

mod fixed;

pub use fixed::FixedHolidayCalendar;
