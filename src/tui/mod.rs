//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen with:
//! - Seven applicant sliders in two columns
//! - The color-coded admission probability and its band
//! - Artifact fingerprints and key hints

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::Theme;
pub use ui::result::ResultState;
