//! Full-frame renderer for the session view.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use breathe_core::{Frame, FrameSink, Tint};
use crossterm::style::Color;
use crossterm::{queue, terminal};

use super::screen;

/// Lines rotated beneath the circle, one every ten seconds of wall time.
const CALM_LINES: [&str; 5] = [
    "Forget the noise. Stay with the breath.",
    "Nothing else is required right now.",
    "Let the body breathe itself.",
    "There is nowhere else to be.",
    "This moment is enough.",
];

pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let (w, h) = terminal::size()?;
        let (cx, cy) = (w / 2, h / 2);

        queue!(out, terminal::Clear(terminal::ClearType::All))?;

        let mode = format!("Mode: {}", frame.mode_name);
        let total = format!("Total: {}s", frame.total_seconds);
        let (inhale, hold_in, exhale, hold_out) = frame.durations;
        let pattern =
            format!("Inhale {inhale} · Hold {hold_in} · Exhale {exhale} · Hold {hold_out}");
        screen::queue_centered(&mut out, cx, cy.saturating_sub(14), &mode)?;
        screen::queue_centered(&mut out, cx, cy.saturating_sub(13), &total)?;
        screen::queue_centered(&mut out, cx, cy.saturating_sub(12), &pattern)?;

        screen::queue_circle(
            &mut out,
            frame.radius,
            cx,
            cy,
            (w, h),
            tint_color(frame.style.tint),
            frame.style.fading,
        )?;

        let countdown = format!("{} · {}", frame.label, frame.seconds_remaining);
        screen::queue_centered(&mut out, cx, row_below(cy, 12, h), &countdown)?;
        screen::queue_centered(&mut out, cx, row_below(cy, 14, h), calm_line())?;

        out.flush()
    }
}

impl FrameSink for TerminalRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        // The engine treats the surface as infallible; a failed write only
        // costs this frame.
        let _ = self.draw(frame);
    }
}

fn row_below(cy: u16, offset: u16, height: u16) -> u16 {
    (cy + offset).min(height.saturating_sub(1))
}

fn calm_line() -> &'static str {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    CALM_LINES[(secs / 10) as usize % CALM_LINES.len()]
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Cool => Color::Cyan,
        Tint::Deep => Color::Blue,
        Tint::Warm => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tint_maps_to_a_distinct_color() {
        let colors = [
            tint_color(Tint::Cool),
            tint_color(Tint::Deep),
            tint_color(Tint::Warm),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn rows_below_clamp_to_the_surface() {
        assert_eq!(row_below(10, 12, 40), 22);
        assert_eq!(row_below(10, 12, 20), 19);
        assert_eq!(row_below(0, 5, 0), 0);
    }
}
