//! GUI components

pub mod format_selector;
pub mod metadata_card;
pub mod task_item;
pub mod url_input;

// Re-export for convenience
pub use format_selector::format_selector;
pub use metadata_card::metadata_card;
pub use task_item::task_item;
pub use url_input::url_input;
