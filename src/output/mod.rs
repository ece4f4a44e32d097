//! Terminal output formatting
//!
//! Colored boards, share text and session summaries.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_feedback, print_game_result, print_hurdle_cleared, print_hurdle_header,
    print_session_summary,
};
