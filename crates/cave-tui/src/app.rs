//! Application state for cave playback

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use cave_core::{Convergence, Grid};

use crate::display::GlyphSet;
use crate::widgets::{CaveWidget, StatusWidget};

/// Playback controller over a finished run.
///
/// Holds the recorded history and a cursor into it. One frame is shown
/// per tick; playback quits on its own after the final frame has been
/// displayed, unless the user paused to look around.
pub struct App {
    history: Vec<Grid>,
    convergence: Convergence,
    seed: Option<u64>,
    glyphs: Box<dyn GlyphSet>,
    frame: usize,
    paused: bool,
    should_quit: bool,
}

impl App {
    /// Create a playback app over a non-empty history.
    pub fn new(
        history: Vec<Grid>,
        convergence: Convergence,
        seed: Option<u64>,
        glyphs: Box<dyn GlyphSet>,
    ) -> Self {
        assert!(!history.is_empty(), "playback needs at least one generation");
        Self {
            history,
            convergence,
            seed,
            glyphs,
            frame: 0,
            paused: false,
            should_quit: false,
        }
    }

    /// Check whether the playback loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Index of the generation currently on screen
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Check whether playback is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn last_frame(&self) -> usize {
        self.history.len() - 1
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('l') | KeyCode::Right => {
                self.paused = true;
                self.frame = (self.frame + 1).min(self.last_frame());
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.paused = true;
                self.frame = self.frame.saturating_sub(1);
            }
            KeyCode::Char('r') => {
                self.frame = 0;
                self.paused = false;
            }
            _ => {}
        }
    }

    /// Advance playback by one frame on a timer tick.
    ///
    /// Once the final frame has been shown for a full tick, the app
    /// asks to quit, matching a plain start-to-finish playback.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        if self.frame < self.last_frame() {
            self.frame += 1;
        } else {
            self.should_quit = true;
        }
    }

    /// Draw the current frame: the cave on top, one status line below.
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(
            CaveWidget::new(&self.history[self.frame], self.glyphs.as_ref()),
            chunks[0],
        );
        frame.render_widget(
            StatusWidget::new(
                self.frame,
                self.last_frame(),
                self.seed,
                self.convergence,
                self.paused,
            ),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use cave_core::{CaveAutomaton, CaveConfig};

    use crate::display::ClassicGlyphs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_with_steps(steps: u32) -> App {
        let config = CaveConfig {
            width: 8,
            height: 8,
            steps,
            seed: Some(1),
            ..CaveConfig::default()
        };
        let mut automaton = CaveAutomaton::new(&config).unwrap();
        automaton.run(steps);
        let convergence = automaton.convergence();
        let seed = automaton.seed();
        App::new(
            automaton.into_history(),
            convergence,
            seed,
            Box::new(ClassicGlyphs),
        )
    }

    #[test]
    fn test_ticks_through_history_then_quits() {
        let mut app = app_with_steps(3);
        assert_eq!(app.frame(), 0);

        for expected in 1..=3 {
            app.tick();
            assert_eq!(app.frame(), expected);
            assert!(!app.should_quit());
        }

        // One more tick past the final frame ends playback.
        app.tick();
        assert!(app.should_quit());
    }

    #[test]
    fn test_pause_freezes_playback() {
        let mut app = app_with_steps(3);
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.is_paused());
        app.tick();
        assert_eq!(app.frame(), 0);
        app.handle_key(key(KeyCode::Char(' ')));
        app.tick();
        assert_eq!(app.frame(), 1);
    }

    #[test]
    fn test_manual_stepping_pauses_and_clamps() {
        let mut app = app_with_steps(2);

        app.handle_key(key(KeyCode::Right));
        assert!(app.is_paused());
        assert_eq!(app.frame(), 1);

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.frame(), 0);

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.frame(), 2);
    }

    #[test]
    fn test_restart_resumes_from_start() {
        let mut app = app_with_steps(3);
        app.tick();
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.frame(), 0);
        assert!(!app.is_paused());
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app_with_steps(1);
            app.handle_key(key(code));
            assert!(app.should_quit());
        }
    }
}
