//! Value objects - immutable types that represent domain concepts

mod hour;
mod slot;
mod soft_delete;
mod weekday;

pub use hour::{HourOfDay, HourRange};
pub use slot::{Slot, SlotKey};
pub use soft_delete::SoftDelete;
pub use weekday::{dia_to_weekday, weekday_to_dia};
