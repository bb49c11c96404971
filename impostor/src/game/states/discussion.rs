use log::{info, warn};

use crate::game::{
    entities::{Outcome, PlayerIdx},
    functional,
    state_machine::{Game, GameError, GameEvent},
};

use super::{Discussion, Guess, Results};

impl Game<Discussion> {
    pub fn init_guess(&mut self) {
        self.state.start_guess = true;
    }

    #[must_use]
    pub fn is_overtime(&self) -> bool {
        functional::is_overtime(self.state.clock.elapsed())
    }
}

impl From<Game<Discussion>> for Game<Guess> {
    fn from(mut value: Game<Discussion>) -> Self {
        let discussion_time = value.state.clock.stop();
        info!(
            "discussion lasted {}",
            functional::format_elapsed(discussion_time)
        );
        Self {
            data: value.data,
            state: Guess {
                selected: None,
                discussion_time,
                confirmed: None,
            },
        }
    }
}

impl Game<Guess> {
    /// Mark `idx` as the group's suspect, replacing any earlier pick.
    pub fn select_impostor(&mut self, idx: PlayerIdx) -> Result<(), GameError> {
        if idx >= self.data.players.len() {
            return Err(GameError::InvalidPlayerIndex(idx));
        }
        if self.state.selected != Some(idx) {
            self.state.selected = Some(idx);
            let name = self.data.player_name(idx);
            self.data.push_event(GameEvent::SuspectSelected(name));
        }
        Ok(())
    }

    pub fn init_confirm(&mut self) -> Result<(), GameError> {
        let idx = self.state.selected.ok_or(GameError::NoSuspectSelected)?;
        self.state.confirmed = Some(idx);
        let name = self.data.player_name(idx);
        self.data.push_event(GameEvent::GuessConfirmed(name));
        Ok(())
    }
}

impl From<Game<Guess>> for Game<Results> {
    fn from(mut value: Game<Guess>) -> Self {
        let accused = value
            .state
            .confirmed
            .or(value.state.selected)
            .unwrap_or_default();
        let outcome = match value.data.impostor_idx {
            Some(impostor_idx) => functional::evaluate_guess(accused, impostor_idx),
            None => {
                warn!("round ended without an impostor");
                Outcome::ImpostorWins
            }
        };
        info!("round over: {outcome}");
        value.data.push_event(GameEvent::RoundOver(outcome));
        Self {
            data: value.data,
            state: Results {
                outcome,
                accused,
                discussion_time: value.state.discussion_time,
                next: None,
            },
        }
    }
}
