//! Closing screen, shown after every session however it ended.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::style::Print;
use crossterm::{cursor, queue, terminal};

use super::screen;

const LINE_DELAY: Duration = Duration::from_millis(700);
const DOT_DELAY: Duration = Duration::from_millis(500);
/// How long the closing screen lingers before returning on its own.
const QUIT_WINDOW: Duration = Duration::from_secs(5);

/// Play the scripted goodbye: three lines, three dots, then wait up to
/// five seconds for `q`.
pub fn play() -> io::Result<()> {
    let mut out = io::stdout().lock();
    let (cx, cy) = screen::center()?;

    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    screen::queue_centered(&mut out, cx, cy.saturating_sub(2), "Session complete")?;
    out.flush()?;
    std::thread::sleep(LINE_DELAY);

    screen::queue_centered(&mut out, cx, cy, "Take a moment.")?;
    out.flush()?;
    std::thread::sleep(LINE_DELAY);

    screen::queue_centered(&mut out, cx, cy + 1, "Notice how you feel.")?;
    out.flush()?;

    for i in 0..3u16 {
        queue!(
            out,
            cursor::MoveTo(cx.saturating_sub(2) + i * 2, cy + 3),
            Print("●")
        )?;
        out.flush()?;
        std::thread::sleep(DOT_DELAY);
    }

    // Hold the screen until `q` or the window closes.
    let end = Instant::now() + QUIT_WINDOW;
    while Instant::now() < end {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    break;
                }
            }
        }
    }
    Ok(())
}
