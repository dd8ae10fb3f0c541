//! Check result panels

pub mod text;

pub use text::{value_text, CheckPanel, PANEL_COLS, PANEL_ROWS};
