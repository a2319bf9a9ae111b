//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cave_core::Convergence;

/// Widget for rendering the playback status line
pub struct StatusWidget {
    iteration: usize,
    last: usize,
    seed: Option<u64>,
    convergence: Convergence,
    paused: bool,
}

impl StatusWidget {
    pub fn new(
        iteration: usize,
        last: usize,
        seed: Option<u64>,
        convergence: Convergence,
        paused: bool,
    ) -> Self {
        Self {
            iteration,
            last,
            seed,
            convergence,
            paused,
        }
    }
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line = format!("Iteration {}/{}", self.iteration, self.last);

        if let Some(seed) = self.seed {
            line.push_str(&format!("  seed {}", seed));
        }

        line.push_str(&format!("  {}", self.convergence));

        if self.paused {
            line.push_str("  [paused]");
        }

        let style = Style::default().fg(Color::White);
        buf.set_string(area.x, area.y, &line, style);
    }
}
