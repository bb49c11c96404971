use log::debug;

use crate::game::{
    assigner,
    constants::WORDS_PER_PLAYER,
    entities::{Avatar, GameMode, Phase, Player, RegistrationStep},
    functional,
    state_machine::{Game, GameData, GameError, GameEvent},
};

use super::{Registration, WordReveal};

/// Start (or restart) registration at the first player's name step.
/// Players already present keep their names and photos.
pub(crate) fn enter_registration(mut data: GameData) -> Game<Registration> {
    data.ensure_players();
    if data.mode == Some(GameMode::Auto) {
        data.draw_auto_words();
    }
    Game {
        data,
        state: Registration::default(),
    }
}

impl Game<Registration> {
    fn mode(&self) -> GameMode {
        self.data.mode.unwrap_or(GameMode::Auto)
    }

    fn current_player(&self) -> Result<&Player, GameError> {
        self.data
            .players
            .get(self.state.index)
            .ok_or(GameError::InvalidPlayerIndex(self.state.index))
    }

    fn current_player_mut(&mut self) -> Result<&mut Player, GameError> {
        let idx = self.state.index;
        self.data
            .players
            .get_mut(idx)
            .ok_or(GameError::InvalidPlayerIndex(idx))
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), GameError> {
        if self.state.step != RegistrationStep::Name {
            return Err(GameError::InvalidAction(Phase::Registration));
        }
        self.current_player_mut()?.name = functional::normalize_name(name);
        Ok(())
    }

    /// Attach (or clear) the photo supplied by the camera.
    pub fn set_avatar(&mut self, avatar: Option<Avatar>) -> Result<(), GameError> {
        if self.state.step != RegistrationStep::Name {
            return Err(GameError::InvalidAction(Phase::Registration));
        }
        self.current_player_mut()?.avatar = avatar;
        Ok(())
    }

    /// Fill in one of the two custom words (`slot` is 0 or 1).
    pub fn set_word(&mut self, slot: usize, word: &str) -> Result<(), GameError> {
        if self.state.step != RegistrationStep::Words || slot >= WORDS_PER_PLAYER {
            return Err(GameError::InvalidAction(Phase::Registration));
        }
        let player = self.current_player_mut()?;
        let words = player.words.get_or_insert_with(Default::default);
        words[slot] = functional::normalize_word(word);
        Ok(())
    }

    pub fn validate_current_step(&self) -> Result<(), GameError> {
        let player = self.current_player()?;
        match self.state.step {
            RegistrationStep::Name => functional::validate_name(&player.name),
            RegistrationStep::Words => functional::validate_words(player.words.as_ref()),
        }
    }

    #[must_use]
    pub fn is_current_step_valid(&self) -> bool {
        self.validate_current_step().is_ok()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        functional::registration_progress(
            self.mode(),
            self.state.index,
            self.state.step,
            self.data.players.len(),
        )
    }

    /// Submit the current step. Moves on to the words step, the next
    /// player, or completes registration once the last player is done.
    pub fn advance(&mut self) -> Result<(), GameError> {
        self.validate_current_step()?;
        let mode = self.mode();

        if mode == GameMode::Custom && self.state.step == RegistrationStep::Name {
            self.current_player_mut()?
                .words
                .get_or_insert_with(Default::default);
            self.state.step = RegistrationStep::Words;
            return Ok(());
        }

        let name = self.current_player()?.name.clone();
        if self.state.index + 1 < self.data.players.len() {
            self.data.push_event(GameEvent::PlayerRegistered(name));
            self.state.index += 1;
            self.state.step = RegistrationStep::Name;
            return Ok(());
        }

        match mode {
            GameMode::Custom => {
                let pool = assigner::collect_pool(&self.data.players);
                let pair = assigner::draw_custom_pair(&mut self.data.rng, &pool)?;
                debug!("custom pool holds {} words", pool.len());
                self.data.word_pool = pool;
                self.data.words = Some(pair);
                self.data.push_event(GameEvent::WordsDrawn(GameMode::Custom));
            }
            GameMode::Auto => {
                if self.data.words.is_none() {
                    self.data.draw_auto_words();
                }
            }
        }
        self.data.push_event(GameEvent::PlayerRegistered(name));
        self.data.push_event(GameEvent::RegistrationComplete);
        self.state.complete = true;
        Ok(())
    }
}

impl From<Game<Registration>> for Game<WordReveal> {
    fn from(mut value: Game<Registration>) -> Self {
        value.data.deal();
        Self {
            data: value.data,
            state: WordReveal::default(),
        }
    }
}
