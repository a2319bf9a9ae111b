//! Cave map widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cave_core::Grid;

use crate::display::GlyphSet;

/// Widget for rendering one cave generation
///
/// Draws the grid row-major, one terminal row per grid row, clipped to
/// the render area.
pub struct CaveWidget<'a> {
    grid: &'a Grid,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> CaveWidget<'a> {
    pub fn new(grid: &'a Grid, glyphs: &'a dyn GlyphSet) -> Self {
        Self { grid, glyphs }
    }

    fn cell_display(&self, x: usize, y: usize) -> (char, Style) {
        let state = self.grid.cell(x, y);
        let color = if state.is_wall() {
            Color::Gray
        } else {
            Color::DarkGray
        };
        (self.glyphs.cell_char(state), Style::default().fg(color))
    }
}

impl Widget for CaveWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..self.grid.height().min(area.height as usize) {
            for x in 0..self.grid.width().min(area.width as usize) {
                let (ch, style) = self.cell_display(x, y);
                if let Some(cell) =
                    buf.cell_mut(Position::new(area.x + x as u16, area.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
