// Display module for board formatting
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_column_headers, format_grid, format_row_prefix, format_session_header,
    format_win_message, print_session, WIN_MESSAGE,
};
