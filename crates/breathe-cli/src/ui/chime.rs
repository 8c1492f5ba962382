//! End-of-phase cue.

use std::io::Write;

use breathe_core::Chime;

/// Terminal bell. Fire and forget: write failures are dropped, a missed
/// cue never reaches the session.
pub struct Bell;

impl Chime for Bell {
    fn notify(&mut self) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
