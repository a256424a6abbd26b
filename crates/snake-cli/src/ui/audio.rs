use std::io::{self, Stdout, Write};

use log::{debug, warn};
use snake_engine::Audio;

const BELL: &[u8] = b"\x07";

/// Sound effects through the terminal bell.
///
/// Starts muted unless asked otherwise. Eating rings once, losing rings twice.
#[derive(Debug)]
pub(crate) struct TerminalBell<W = Stdout> {
    enabled: bool,
    out: W,
}

impl TerminalBell {
    pub(crate) fn new(enabled: bool) -> Self {
        Self::with_writer(enabled, io::stdout())
    }
}

impl<W> TerminalBell<W>
where
    W: Write,
{
    pub(crate) fn with_writer(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn toggle(&mut self) {
        self.enabled = !self.enabled;
        debug!("sound {}", if self.enabled { "on" } else { "off" });
    }

    fn ring(&mut self, times: usize) {
        if !self.enabled {
            return;
        }
        let result = (0..times)
            .try_for_each(|_| self.out.write_all(BELL))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("failed to ring terminal bell: {e}");
        }
    }
}

impl<W> Audio for TerminalBell<W>
where
    W: Write,
{
    fn on_food_eaten(&mut self) {
        self.ring(1);
    }

    fn on_game_over(&mut self) {
        self.ring(2);
    }
}
