pub mod layout;
pub mod pool;

pub use layout::{GridSpec, Slot, assign_rows, chip_width, occupied_rows};
pub use pool::Pool;
