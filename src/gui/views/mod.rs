//! Application views

pub mod main_view;
pub mod setup_view;

pub use main_view::main_view;
pub use setup_view::setup_view;
