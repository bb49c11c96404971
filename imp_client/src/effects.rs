//! Sound and celebration hooks.
//!
//! A terminal can't play audio files, so cues are rung on the terminal
//! bell and written to the log. Both are fire-and-forget.

use impostor::{Cue, Outcome};
use log::{debug, info};
use std::io::{self, Write};

pub trait Effects {
    fn play(&mut self, cue: Cue);

    fn celebrate(&mut self, outcome: Outcome);

    fn set_muted(&mut self, muted: bool);

    fn is_muted(&self) -> bool;
}

/// Rings the bell for the cues that deserve attention.
#[derive(Debug)]
pub struct TerminalEffects<W: Write = io::Stdout> {
    out: W,
    muted: bool,
}

impl TerminalEffects {
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self::with_writer(io::stdout(), muted)
    }
}

impl<W: Write> TerminalEffects<W> {
    pub const fn with_writer(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    fn bell(&mut self, times: usize) {
        let bells = "\x07".repeat(times);
        if let Err(error) = self
            .out
            .write_all(bells.as_bytes())
            .and_then(|()| self.out.flush())
        {
            debug!("bell failed: {error}");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Effects for TerminalEffects<W> {
    fn play(&mut self, cue: Cue) {
        debug!("cue: {cue}");
        if self.muted {
            return;
        }
        match cue {
            Cue::Reveal | Cue::Win => self.bell(1),
            Cue::Lose => self.bell(2),
            Cue::Click | Cue::Success => {}
        }
    }

    fn celebrate(&mut self, outcome: Outcome) {
        info!("{}", outcome.headline());
        if outcome.civilians_won() && !self.muted {
            self.bell(3);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Swallows every cue.
#[derive(Debug, Default)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn play(&mut self, _cue: Cue) {}

    fn celebrate(&mut self, _outcome: Outcome) {}

    fn set_muted(&mut self, _muted: bool) {}

    fn is_muted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_on_reveal() {
        let mut effects = TerminalEffects::with_writer(Vec::new(), false);
        effects.play(Cue::Reveal);
        effects.play(Cue::Click);
        assert_eq!(effects.into_inner(), b"\x07");
    }

    #[test]
    fn test_muted_is_silent() {
        let mut effects = TerminalEffects::with_writer(Vec::new(), true);
        effects.play(Cue::Lose);
        effects.celebrate(Outcome::CiviliansWin);
        assert!(effects.into_inner().is_empty());
    }

    #[test]
    fn test_celebrate_only_on_win() {
        let mut effects = TerminalEffects::with_writer(Vec::new(), false);
        effects.celebrate(Outcome::ImpostorWins);
        effects.celebrate(Outcome::CiviliansWin);
        assert_eq!(effects.into_inner().len(), 3);
    }

    #[test]
    fn test_toggle_mute() {
        let mut effects = TerminalEffects::with_writer(Vec::new(), false);
        effects.set_muted(!effects.is_muted());
        assert!(effects.is_muted());
    }
}
