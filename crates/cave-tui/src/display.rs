//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and Unicode block characters.

use cave_core::CellState;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Unicode block characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering cave cells.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a cave cell.
    fn cell_char(&self, state: CellState) -> char;
}

/// Classic ASCII glyph set: '#' walls, blank floor.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn cell_char(&self, state: CellState) -> char {
        state.symbol()
    }
}

/// Unicode block glyph set.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn cell_char(&self, state: CellState) -> char {
        match state {
            CellState::Wall => '█',
            CellState::Floor => '·',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            if val.to_uppercase().contains("UTF-8") || val.to_uppercase().contains("UTF8") {
                return true;
            }
        }
    }

    // Most modern terminals support UTF-8 by default; fall back to TERM.
    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}
