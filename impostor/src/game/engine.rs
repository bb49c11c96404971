use enum_dispatch::enum_dispatch;
use log::{debug, warn};
use std::collections::VecDeque;

use super::{
    entities::{Avatar, GameMode, GameView, Phase, PlayerIdx},
    state_machine::{Game, GameData, GameError, GameEvent, GameSettings, GameStateManagement},
    states::{
        Discussion, Guess, NextRound, Registration, Rematch, Results, Setup, WordReveal,
        change_words,
    },
    timers::{Deferred, DeferredAction},
};

/// The whole game: exactly one phase is active at a time.
///
/// Player actions only record intent (or fail without touching the game);
/// [`ImpostorState::step`] consumes the state and performs whatever
/// transition the recorded intent allows.
#[enum_dispatch(GameStateManagement)]
#[derive(Debug)]
pub enum ImpostorState {
    Setup(Game<Setup>),
    Registration(Game<Registration>),
    WordReveal(Game<WordReveal>),
    Discussion(Game<Discussion>),
    Guess(Game<Guess>),
    Results(Game<Results>),
}

impl Default for ImpostorState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameSettings> for ImpostorState {
    fn from(value: GameSettings) -> Self {
        Self::Setup(Game {
            data: GameData::from(value),
            state: Setup::default(),
        })
    }
}

impl ImpostorState {
    #[must_use]
    pub fn new() -> Self {
        Self::from(GameSettings::default())
    }

    fn invalid<T>(&self) -> Result<T, GameError> {
        Err(GameError::InvalidAction(self.phase()))
    }

    pub fn increase_players(&mut self) -> Result<bool, GameError> {
        match self {
            Self::Setup(game) => Ok(game.increase_players()),
            _ => self.invalid(),
        }
    }

    pub fn decrease_players(&mut self) -> Result<bool, GameError> {
        match self {
            Self::Setup(game) => Ok(game.decrease_players()),
            _ => self.invalid(),
        }
    }

    pub fn set_player_count(&mut self, player_count: usize) -> Result<(), GameError> {
        match self {
            Self::Setup(game) => game.set_player_count(player_count),
            _ => self.invalid(),
        }
    }

    pub fn select_mode(&mut self, mode: GameMode) -> Result<(), GameError> {
        match self {
            Self::Setup(game) => {
                game.select_mode(mode);
                Ok(())
            }
            _ => self.invalid(),
        }
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        match self {
            Self::Setup(game) => game.init_start(),
            _ => self.invalid(),
        }
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), GameError> {
        match self {
            Self::Registration(game) => game.set_name(name),
            _ => self.invalid(),
        }
    }

    pub fn set_avatar(&mut self, avatar: Option<Avatar>) -> Result<(), GameError> {
        match self {
            Self::Registration(game) => game.set_avatar(avatar),
            _ => self.invalid(),
        }
    }

    pub fn set_word(&mut self, slot: usize, word: &str) -> Result<(), GameError> {
        match self {
            Self::Registration(game) => game.set_word(slot, word),
            _ => self.invalid(),
        }
    }

    #[must_use]
    pub fn is_current_step_valid(&self) -> bool {
        match self {
            Self::Registration(game) => game.is_current_step_valid(),
            _ => false,
        }
    }

    pub fn advance(&mut self) -> Result<(), GameError> {
        match self {
            Self::Registration(game) => game.advance(),
            _ => self.invalid(),
        }
    }

    pub fn reveal_word(&mut self, idx: PlayerIdx) -> Result<String, GameError> {
        match self {
            Self::WordReveal(game) => game.reveal_word(idx),
            _ => self.invalid(),
        }
    }

    pub fn hide_word(&mut self) -> Result<Deferred, GameError> {
        match self {
            Self::WordReveal(game) => game.hide_word(),
            _ => self.invalid(),
        }
    }

    /// Run a deferral handed out earlier. Returns whether it had any
    /// effect; deferrals from an earlier phase are dropped.
    pub fn fire(&mut self, deferred: Deferred) -> bool {
        let epoch = self.data().epoch();
        if deferred.token.is_cancelled(epoch) {
            warn!(
                "dropping stale {:?} during {}",
                deferred.action,
                self.phase()
            );
            return false;
        }
        match (self, deferred.action) {
            (Self::WordReveal(game), DeferredAction::MarkRevealed(idx)) => game.mark_revealed(idx),
            (state, action) => {
                debug!("{action:?} has no effect during {}", state.phase());
                false
            }
        }
    }

    pub fn start_guess(&mut self) -> Result<(), GameError> {
        match self {
            Self::Discussion(game) => {
                game.init_guess();
                Ok(())
            }
            _ => self.invalid(),
        }
    }

    pub fn select_impostor(&mut self, idx: PlayerIdx) -> Result<(), GameError> {
        match self {
            Self::Guess(game) => game.select_impostor(idx),
            _ => self.invalid(),
        }
    }

    pub fn confirm_guess(&mut self) -> Result<(), GameError> {
        match self {
            Self::Guess(game) => game.init_confirm(),
            _ => self.invalid(),
        }
    }

    pub fn play_again(&mut self) -> Result<(), GameError> {
        match self {
            Self::Results(game) => {
                game.play_again();
                Ok(())
            }
            _ => self.invalid(),
        }
    }

    pub fn change_words(&mut self) -> Result<(), GameError> {
        match self {
            Self::Results(game) => {
                game.change_words();
                Ok(())
            }
            _ => self.invalid(),
        }
    }

    pub fn new_game(&mut self) -> Result<(), GameError> {
        match self {
            Self::Results(game) => {
                game.new_game();
                Ok(())
            }
            _ => self.invalid(),
        }
    }

    /// Perform the transition the current phase is ready for, if any.
    /// Every phase change advances the epoch, cancelling deferrals issued
    /// in the previous phase.
    #[must_use]
    pub fn step(self) -> Self {
        let before = self.phase();
        let mut next = match self {
            Self::Setup(game) if game.state.start_game => Self::Registration(game.into()),
            Self::Registration(game) if game.state.complete => Self::WordReveal(game.into()),
            Self::WordReveal(game) if game.all_revealed() => Self::Discussion(game.into()),
            Self::Discussion(game) if game.state.start_guess => Self::Guess(game.into()),
            Self::Guess(game) if game.state.confirmed.is_some() => Self::Results(game.into()),
            Self::Results(game) => match game.next_round() {
                Some(NextRound::PlayAgain) => match Rematch::from(game) {
                    Rematch::Reveal(game) => Self::WordReveal(game),
                    Rematch::Register(game) => Self::Registration(game),
                },
                Some(NextRound::ChangeWords) => Self::Registration(change_words(game)),
                Some(NextRound::NewGame) => Self::Setup(game.into()),
                None => Self::Results(game),
            },
            state => state,
        };
        let after = next.phase();
        if after != before {
            next.data_mut().epoch.advance();
            debug!("{before} -> {after}");
        }
        next
    }
}
