//! Phase definitions for the impostor FSM.
//!
//! Each state represents a specific phase of a round; the submodules hold
//! the player actions allowed in that phase and the transitions out of it.

use std::{collections::BTreeSet, time::Duration};

use super::{
    entities::{
        GameMode, GameView, Outcome, Phase, PlayerIdx, RegistrationStep, RegistrationView,
        RevealView,
    },
    functional,
    state_machine::{GameData, PhaseState},
    timers::DiscussionClock,
};

mod discussion;
mod registration;
mod results;
mod reveal;
mod setup;

pub(crate) use registration::enter_registration;
pub(crate) use results::{Rematch, change_words};

/// Setup phase - choosing the player count and word mode
#[derive(Debug, Default)]
pub struct Setup {
    pub(crate) start_game: bool,
}

/// Registering players one at a time
#[derive(Debug, Default)]
pub struct Registration {
    pub index: PlayerIdx,
    pub step: RegistrationStep,
    pub(crate) complete: bool,
}

/// Players take turns privately viewing their word
#[derive(Debug, Default)]
pub struct WordReveal {
    pub revealed: BTreeSet<PlayerIdx>,
    /// Player currently looking at their word.
    pub revealing: Option<PlayerIdx>,
    /// Player who hid their word and is handing the device on.
    pub passing: Option<PlayerIdx>,
}

/// The group discusses while the clock runs
#[derive(Debug)]
pub struct Discussion {
    pub clock: DiscussionClock,
    pub(crate) start_guess: bool,
}

/// The group picks a suspect
#[derive(Debug)]
pub struct Guess {
    pub selected: Option<PlayerIdx>,
    pub discussion_time: Duration,
    pub(crate) confirmed: Option<PlayerIdx>,
}

/// What the players chose to do after a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NextRound {
    /// Same players, new draw.
    PlayAgain,
    /// Same players, new words from scratch.
    ChangeWords,
    /// Back to setup.
    NewGame,
}

/// The impostor is unmasked
#[derive(Debug)]
pub struct Results {
    pub outcome: Outcome,
    pub accused: PlayerIdx,
    pub discussion_time: Duration,
    pub(crate) next: Option<NextRound>,
}

impl PhaseState for Setup {
    const PHASE: Phase = Phase::Setup;
}

impl PhaseState for Registration {
    const PHASE: Phase = Phase::Registration;

    fn decorate_view(&self, data: &GameData, view: &mut GameView) {
        let Some(player) = data.players.get(self.index) else {
            return;
        };
        let mode = data.mode.unwrap_or(GameMode::Auto);
        let player_count = data.players.len();
        let is_last = self.index + 1 == player_count
            && (mode == GameMode::Auto || self.step == RegistrationStep::Words);
        let can_submit = match self.step {
            RegistrationStep::Name => functional::validate_name(&player.name).is_ok(),
            RegistrationStep::Words => functional::validate_words(player.words.as_ref()).is_ok(),
        };
        view.registration = Some(RegistrationView {
            index: self.index,
            step: self.step,
            progress: functional::registration_progress(mode, self.index, self.step, player_count),
            label: functional::registration_label(mode, self.index, self.step, player_count),
            name: player.name.clone(),
            words: player.words.clone(),
            can_submit,
            is_last,
        });
    }
}

impl PhaseState for WordReveal {
    const PHASE: Phase = Phase::WordReveal;

    fn decorate_view(&self, data: &GameData, view: &mut GameView) {
        for player in &mut view.players {
            player.revealed = self.revealed.contains(&player.id);
        }
        view.revealing = self.revealing.and_then(|idx| {
            let word = data.players.get(idx)?.word.clone()?;
            Some(RevealView { player: idx, word })
        });
        view.passing = self.passing;
    }
}

impl PhaseState for Discussion {
    const PHASE: Phase = Phase::Discussion;

    fn decorate_view(&self, _data: &GameData, view: &mut GameView) {
        for player in &mut view.players {
            player.revealed = true;
        }
        view.discussion_elapsed = Some(self.clock.elapsed());
    }
}

impl PhaseState for Guess {
    const PHASE: Phase = Phase::Guess;

    fn decorate_view(&self, _data: &GameData, view: &mut GameView) {
        for player in &mut view.players {
            player.revealed = true;
        }
        view.discussion_elapsed = Some(self.discussion_time);
        view.selected = self.selected;
    }
}

impl PhaseState for Results {
    const PHASE: Phase = Phase::Result;

    fn decorate_view(&self, data: &GameData, view: &mut GameView) {
        for player in &mut view.players {
            let is_impostor = data.impostor_idx == Some(player.id);
            player.revealed = true;
            player.is_impostor = Some(is_impostor);
            if is_impostor {
                player.word = data
                    .players
                    .get(player.id)
                    .and_then(|player| player.word.clone());
            }
        }
        view.discussion_elapsed = Some(self.discussion_time);
        view.selected = Some(self.accused);
        view.outcome = Some(self.outcome);
        view.words = data.words.clone();
    }
}
