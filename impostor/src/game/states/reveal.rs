use log::{debug, info};

use crate::game::{
    entities::PlayerIdx,
    state_machine::{Game, GameError, GameEvent},
    timers::{Deferred, DeferredAction, DiscussionClock},
};

use super::{Discussion, WordReveal};

impl Game<WordReveal> {
    fn check_index(&self, idx: PlayerIdx) -> Result<(), GameError> {
        if idx >= self.data.players.len() {
            return Err(GameError::InvalidPlayerIndex(idx));
        }
        Ok(())
    }

    /// Show `idx` their word. Only one word may be showing at a time and
    /// nobody can look while the device is being passed on.
    pub fn reveal_word(&mut self, idx: PlayerIdx) -> Result<String, GameError> {
        self.check_index(idx)?;
        if self.state.revealing.is_some() || self.state.passing.is_some() {
            return Err(GameError::RevealInProgress);
        }
        if self.state.revealed.contains(&idx) {
            return Err(GameError::AlreadyRevealed(idx));
        }
        let word = self.data.players[idx].word.clone().unwrap_or_default();
        self.state.revealing = Some(idx);
        let name = self.data.player_name(idx);
        self.data.push_event(GameEvent::WordRevealed(name));
        Ok(word)
    }

    /// Hide the word that's showing. The player is only counted as having
    /// seen their word once the returned deferral fires.
    pub fn hide_word(&mut self) -> Result<Deferred, GameError> {
        let idx = self.state.revealing.take().ok_or(GameError::NoRevealOpen)?;
        self.state.passing = Some(idx);
        let name = self.data.player_name(idx);
        self.data.push_event(GameEvent::PassDevice(name));
        Ok(Deferred {
            token: self.data.epoch().token(),
            delay: self.data.settings().pass_device_delay,
            action: DeferredAction::MarkRevealed(idx),
        })
    }

    /// Finish passing the device. Returns whether `idx` was newly counted.
    pub(crate) fn mark_revealed(&mut self, idx: PlayerIdx) -> bool {
        if self.state.passing == Some(idx) {
            self.state.passing = None;
        }
        if idx >= self.data.players.len() || !self.state.revealed.insert(idx) {
            debug!("ignoring duplicate reveal for seat {idx}");
            return false;
        }
        if self.all_revealed() {
            self.data.push_event(GameEvent::AllRevealed);
        }
        true
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.state.revealed.len() == self.data.players.len()
    }
}

impl From<Game<WordReveal>> for Game<Discussion> {
    fn from(value: Game<WordReveal>) -> Self {
        info!(
            "discussion started with {} players",
            value.data.players.len()
        );
        Self {
            data: value.data,
            state: Discussion {
                clock: DiscussionClock::start(),
                start_guess: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        entities::{GameMode, WordPair},
        state_machine::{GameData, GameSettings},
    };

    fn reveal(player_count: usize) -> Game<WordReveal> {
        let mut data = GameData::from(GameSettings::new(player_count, Some(GameMode::Auto), Some(9)));
        data.ensure_players();
        data.words = Some(WordPair::new("cat", "dog"));
        data.deal();
        Game {
            data,
            state: WordReveal::default(),
        }
    }

    #[test]
    fn test_reveal_returns_assigned_word() {
        let mut game = reveal(3);
        let impostor = game.data.impostor_idx.unwrap();
        let word = game.reveal_word(impostor).unwrap();
        assert_eq!(word, "dog");
        assert_eq!(game.state.revealing, Some(impostor));
    }

    #[test]
    fn test_one_reveal_at_a_time() {
        let mut game = reveal(3);
        game.reveal_word(0).unwrap();
        assert_eq!(game.reveal_word(1), Err(GameError::RevealInProgress));
        game.hide_word().unwrap();
        assert_eq!(game.reveal_word(1), Err(GameError::RevealInProgress));
        assert!(game.mark_revealed(0));
        assert!(game.reveal_word(1).is_ok());
    }

    #[test]
    fn test_revealed_player_cannot_look_again() {
        let mut game = reveal(3);
        game.reveal_word(2).unwrap();
        game.hide_word().unwrap();
        game.mark_revealed(2);
        assert_eq!(game.reveal_word(2), Err(GameError::AlreadyRevealed(2)));
        assert_eq!(game.reveal_word(3), Err(GameError::InvalidPlayerIndex(3)));
    }

    #[test]
    fn test_hide_without_reveal() {
        let mut game = reveal(3);
        assert_eq!(game.hide_word(), Err(GameError::NoRevealOpen));
    }

    #[test]
    fn test_hide_issues_deferral_for_current_epoch() {
        let mut game = reveal(3);
        game.reveal_word(1).unwrap();
        let deferred = game.hide_word().unwrap();
        assert_eq!(deferred.action, DeferredAction::MarkRevealed(1));
        assert_eq!(deferred.delay, game.data.settings().pass_device_delay);
        assert!(!deferred.token.is_cancelled(game.data.epoch()));
        assert_eq!(game.state.passing, Some(1));
        assert!(game.state.revealing.is_none());
    }

    #[test]
    fn test_all_revealed_once() {
        let mut game = reveal(3);
        for idx in 0..3 {
            assert!(!game.all_revealed());
            game.reveal_word(idx).unwrap();
            game.hide_word().unwrap();
            assert!(game.mark_revealed(idx));
        }
        assert!(game.all_revealed());
        assert!(!game.mark_revealed(0));
        let all_revealed = game
            .data
            .events
            .iter()
            .filter(|event| **event == GameEvent::AllRevealed)
            .count();
        assert_eq!(all_revealed, 1);
    }
}
