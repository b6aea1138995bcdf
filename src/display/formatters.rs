// Display formatting utilities

/// Status line printed under every frame
pub fn format_status_line(width: usize, height: usize, generation: u64) -> String {
    format!(
        "width: {}, height: {}, iteration: {}",
        width, height, generation
    )
}

/// Usage line printed when the command line cannot be understood
pub fn format_usage(program: &str) -> String {
    format!("Usage: {} <width> <height>", program)
}
