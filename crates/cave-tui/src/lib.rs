//! cave-tui: Terminal playback layer using ratatui
//!
//! Replays every recorded generation of a cave run in the terminal.

pub mod app;
pub mod display;
pub mod widgets;

pub use app::App;
pub use display::{ClassicGlyphs, FancyGlyphs, GlyphSet, GraphicsMode, detect_glyph_set};
