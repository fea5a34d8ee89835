//! Records exchanged between the date input widget and its host runtime.

pub mod enums;
pub mod shared;
