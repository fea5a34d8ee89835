pub mod calendar_popover;
pub mod component;
pub mod state;

pub use calendar_popover::CalendarPopover;
pub use component::DateInput;
pub use state::{InputContext, InteractionState, Selection, ValueChange};
