//! Terminal rendering of a running search.
//!
//! Both observers write to any `io::Write` sink. The animator draws each step
//! as a character plot of the layout and then pauses so the walk can be
//! followed by eye.

use colored::*;
use log::warn;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::algorithm::{SearchObserver, SearchStep, StepKind};
use crate::graph::layout::Layout;
use crate::Error;

const PLOT_SYMBOLS: &[u8] = b"123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Glyph for the `index`-th city drawn in a frame. Repeats as `+` once the set runs out.
pub fn plot_symbol(index: usize) -> char {
    PLOT_SYMBOLS.get(index).map_or('+', |&b| b as char)
}

/// Draws one frame of the layout with the path so far highlighted
pub fn render_frame(step: &SearchStep<'_>, layout: &Layout, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);
    let mut grid = vec![vec!["·".bright_black(); width]; height];
    let mut labels: Vec<(char, &str)> = Vec::new();

    for city in step.path {
        let Some(point) = layout.position(city) else {
            continue;
        };
        let col = ((point.x * (width - 1) as f64).round() as usize).min(width - 1);
        let row = ((point.y * (height - 1) as f64).round() as usize).min(height - 1);
        let symbol = match labels.iter().find(|(_, name)| *name == city.as_str()) {
            Some((symbol, _)) => *symbol,
            None => {
                let symbol = plot_symbol(labels.len());
                labels.push((symbol, city.as_str()));
                symbol
            }
        };

        grid[row][col] = if city == step.current {
            symbol.to_string().bright_green().bold()
        } else {
            symbol.to_string().bright_yellow().bold()
        };
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("┌{}┐", "─".repeat(width)).bright_white()));
    for row in &grid {
        out.push_str(&"│".bright_white().to_string());
        for cell in row {
            out.push_str(&cell.to_string());
        }
        out.push_str(&format!("{}\n", "│".bright_white()));
    }
    out.push_str(&format!("{}\n", format!("└{}┘", "─".repeat(width)).bright_white()));
    for (symbol, name) in &labels {
        out.push_str(&format!("{} = {}\n", symbol.to_string().bright_yellow(), name));
    }

    out.push_str(&format!("{} {}\n", "Path:".bright_white().bold(), step.path.join(" -> ")));
    let position = layout
        .position(step.current)
        .map(|p| format!(" at ({:.2}, {:.2})", p.x, p.y))
        .unwrap_or_default();
    out.push_str(&format!(
        "{} {}{}  {} {}\n",
        step_label(step.kind),
        step.current.bright_green().bold(),
        position,
        "distance".bright_black(),
        step.distance
    ));
    if step.is_final {
        out.push_str(&format!("{}\n", "Destination reached!".bright_green().bold()));
    }
    out
}

fn step_label(kind: StepKind) -> ColoredString {
    match kind {
        StepKind::Start => "Start".bright_cyan(),
        StepKind::Advance => "Advance".bright_yellow(),
        StepKind::Backtrack => "Backtrack".bright_red(),
        StepKind::Arrived => "Arrived".bright_green(),
    }
}

/// Animates a search frame by frame
pub struct TerminalAnimator<'l, O: Write> {
    out: O,
    layout: &'l Layout,
    pause: Duration,
    width: usize,
    height: usize,
    clear_screen: bool,
    frames: usize,
}

impl<'l> TerminalAnimator<'l, io::Stdout> {
    pub fn stdout(layout: &'l Layout, pause: Duration) -> Self {
        TerminalAnimator::new(io::stdout(), layout, pause)
    }
}

impl<'l, O: Write> TerminalAnimator<'l, O> {
    pub fn new(out: O, layout: &'l Layout, pause: Duration) -> Self {
        TerminalAnimator {
            out,
            layout,
            pause,
            width: 40,
            height: 16,
            clear_screen: true,
            frames: 0,
        }
    }

    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> O {
        self.out
    }

    fn draw(&mut self, step: &SearchStep<'_>) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "\x1B[2J\x1B[1;1H")?;
        }
        write!(self.out, "{}", render_frame(step, self.layout, self.width, self.height))?;
        self.out.flush()
    }
}

impl<'l, O: Write> SearchObserver for TerminalAnimator<'l, O> {
    fn on_step(&mut self, step: &SearchStep<'_>) {
        if let Err(err) = self.draw(step) {
            warn!("Failed to draw frame: {}", err);
            return;
        }
        self.frames += 1;
        if !step.is_final && !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }

    fn on_failure(&mut self, error: &Error) {
        if let Err(err) = writeln!(self.out, "{} {}", "Search failed:".bright_red().bold(), error) {
            warn!("Failed to draw frame: {}", err);
        }
    }
}

/// Prints one plain line per step
pub struct TraceObserver<O: Write> {
    out: O,
}

impl TraceObserver<io::Stdout> {
    pub fn stdout() -> Self {
        TraceObserver { out: io::stdout() }
    }
}

impl<O: Write> TraceObserver<O> {
    pub fn new(out: O) -> Self {
        TraceObserver { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> SearchObserver for TraceObserver<O> {
    fn on_step(&mut self, step: &SearchStep<'_>) {
        let line = match step.kind {
            StepKind::Start => format!("Starting at {}", step.current),
            StepKind::Advance | StepKind::Arrived => {
                format!("Moving to {} (distance so far: {})", step.current, step.distance)
            }
            StepKind::Backtrack => format!("Dead end, backing up to {}", step.current),
        };
        if let Err(err) = writeln!(self.out, "{}", line) {
            warn!("Failed to write trace: {}", err);
        }
    }

    fn on_failure(&mut self, error: &Error) {
        if let Err(err) = writeln!(self.out, "Stopped: {}", error) {
            warn!("Failed to write trace: {}", err);
        }
    }
}
