//! Terminal surface: setup/teardown guard and drawing primitives.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

/// Vertical squash applied to the circle so it reads round in a cell grid.
const ASPECT_Y: f32 = 0.5;
/// Concentric rings drawn per circle.
const BORDER_THICKNESS: u32 = 6;
/// Angle step when plotting ring cells, in radians.
const ANGLE_STEP: f32 = 0.045;

/// Raw-mode + alternate-screen guard. Dropping it restores the terminal,
/// whatever path the session took out.
pub struct Screen;

impl Screen {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            io::stdout(),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Center of the current terminal, in cells.
pub fn center() -> io::Result<(u16, u16)> {
    let (w, h) = terminal::size()?;
    Ok((w / 2, h / 2))
}

/// Queue `text` centered horizontally around `cx` on row `y`.
pub fn queue_centered(out: &mut impl Write, cx: u16, y: u16, text: &str) -> io::Result<()> {
    let x = cx.saturating_sub(text.chars().count() as u16 / 2);
    queue!(out, cursor::MoveTo(x, y), Print(text))
}

/// Queue one breathing circle: concentric rings around `(cx, cy)`, clipped
/// to `bounds`. The outer ring softens to dots while `fading`; inner rings
/// are bold.
pub fn queue_circle(
    out: &mut impl Write,
    radius: f32,
    cx: u16,
    cy: u16,
    bounds: (u16, u16),
    color: Color,
    fading: bool,
) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;

    for ring in 0..BORDER_THICKNESS {
        let ring_radius = radius + ring as f32 * 0.9;
        let outer = ring == BORDER_THICKNESS - 1;
        let glyph = if outer && fading { '.' } else { 'o' };

        if !outer {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }

        let mut angle = 0.0f32;
        while angle < std::f32::consts::TAU {
            let x = cx as i32 + (angle.cos() * ring_radius) as i32;
            let y = cy as i32 + (angle.sin() * ring_radius * ASPECT_Y) as i32;
            if x >= 0 && y >= 0 && x < bounds.0 as i32 && y < bounds.1 as i32 {
                queue!(out, cursor::MoveTo(x as u16, y as u16), Print(glyph))?;
            }
            angle += ANGLE_STEP;
        }

        if !outer {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
        }
    }

    queue!(out, SetForegroundColor(Color::Reset))
}
