//! Cave generator
//!
//! Generates a cave with a cellular automaton, replays every generation
//! in the terminal, and reports how quickly the cave settled.

use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use cave_core::{CaveAutomaton, CaveConfig};
use cave_tui::{App, GraphicsMode, detect_glyph_set};

/// Cave generator
#[derive(Parser, Debug)]
#[command(name = "cavegen")]
#[command(author, version, about = "Generate caves with a cellular automaton", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(short = 'W', long = "width", default_value_t = cave_core::DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long = "height", default_value_t = cave_core::DEFAULT_HEIGHT)]
    height: usize,

    /// Probability that a cell starts as wall
    #[arg(short = 'f', long = "fill", default_value_t = cave_core::DEFAULT_WALL_FRACTION)]
    fill: f64,

    /// Number of smoothing steps
    #[arg(short = 'n', long = "steps", default_value_t = cave_core::DEFAULT_STEPS)]
    steps: u32,

    /// RNG seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Delay between playback frames in milliseconds
    #[arg(short = 'd', long = "delay-ms", default_value_t = 400)]
    delay_ms: u64,

    /// Graphics mode (classic, fancy, auto)
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = CaveConfig {
        width: args.width,
        height: args.height,
        wall_fraction: args.fill,
        steps: args.steps,
        seed: args.seed,
    };

    // Reject bad parameters before touching the terminal.
    let mut automaton = match CaveAutomaton::new(&config) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("cavegen: {err}");
            return ExitCode::from(2);
        }
    };

    // The whole run is computed up front; the terminal only replays it.
    automaton.run(config.steps);

    let convergence = automaton.convergence();
    let seed = automaton.seed();
    let glyphs = detect_glyph_set(args.graphics);
    let mut app = App::new(automaton.into_history(), convergence, seed, glyphs);

    if let Err(err) = replay(&mut app, Duration::from_millis(args.delay_ms)) {
        eprintln!("cavegen: {err}");
        return ExitCode::FAILURE;
    }

    // Final summary on the regular screen, like the playback never was.
    if let Some(seed) = seed {
        println!("seed {seed}");
    }
    println!("{convergence}");
    ExitCode::SUCCESS
}

/// Set up the terminal, run the playback loop, and restore the terminal
/// even when the loop fails.
fn replay(app: &mut App, delay: Duration) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = playback_loop(&mut terminal, app, delay);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn playback_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    delay: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = delay.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= delay {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
