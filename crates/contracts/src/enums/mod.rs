pub mod width_option;

pub use width_option::WidthOption;
