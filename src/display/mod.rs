// Display module for frame formatting and terminal control
pub mod formatters;
pub mod terminal;

// Re-export main functions
pub use formatters::{format_status_line, format_usage};
pub use terminal::{draw_frame, prepare_terminal, restore_terminal};
