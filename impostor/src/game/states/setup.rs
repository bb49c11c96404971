use crate::game::{
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    entities::GameMode,
    state_machine::{Game, GameError, GameEvent},
};

use super::{Registration, Setup, enter_registration};

impl Game<Setup> {
    /// Returns whether the count changed (it's capped at [`MAX_PLAYERS`]).
    pub fn increase_players(&mut self) -> bool {
        self.set_player_count(self.data.player_count + 1).is_ok()
    }

    /// Returns whether the count changed (it's floored at [`MIN_PLAYERS`]).
    pub fn decrease_players(&mut self) -> bool {
        self.data
            .player_count
            .checked_sub(1)
            .is_some_and(|count| self.set_player_count(count).is_ok())
    }

    pub fn set_player_count(&mut self, player_count: usize) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }
        if self.data.player_count != player_count {
            self.data.player_count = player_count;
            self.data.players.clear();
            self.data
                .push_event(GameEvent::PlayerCountChanged(player_count));
        }
        Ok(())
    }

    pub fn select_mode(&mut self, mode: GameMode) {
        self.data.mode = Some(mode);
        self.data.push_event(GameEvent::ModeSelected(mode));
    }

    pub fn init_start(&mut self) -> Result<(), GameError> {
        if self.data.mode.is_none() {
            return Err(GameError::ModeRequired);
        }
        self.state.start_game = true;
        Ok(())
    }
}

impl From<Game<Setup>> for Game<Registration> {
    fn from(value: Game<Setup>) -> Self {
        enter_registration(value.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state_machine::{GameData, GameSettings};

    fn setup(player_count: usize) -> Game<Setup> {
        Game {
            data: GameData::from(GameSettings::new(player_count, None, Some(3))),
            state: Setup::default(),
        }
    }

    #[test]
    fn test_increase_players_capped() {
        let mut game = setup(MAX_PLAYERS - 1);
        assert!(game.increase_players());
        assert_eq!(game.data.player_count, MAX_PLAYERS);
        assert!(!game.increase_players());
        assert_eq!(game.data.player_count, MAX_PLAYERS);
    }

    #[test]
    fn test_decrease_players_floored() {
        let mut game = setup(MIN_PLAYERS + 1);
        assert!(game.decrease_players());
        assert!(!game.decrease_players());
        assert_eq!(game.data.player_count, MIN_PLAYERS);
    }

    #[test]
    fn test_set_player_count_out_of_range() {
        let mut game = setup(4);
        assert_eq!(
            game.set_player_count(11),
            Err(GameError::InvalidPlayerCount(11))
        );
        assert_eq!(game.data.player_count, 4);
    }

    #[test]
    fn test_init_start_requires_mode() {
        let mut game = setup(4);
        assert_eq!(game.init_start(), Err(GameError::ModeRequired));
        assert!(!game.state.start_game);

        game.select_mode(GameMode::Custom);
        assert_eq!(game.init_start(), Ok(()));
        assert!(game.state.start_game);
    }

    #[test]
    fn test_enter_registration_creates_players() {
        let mut game = setup(5);
        game.select_mode(GameMode::Custom);
        let game: Game<Registration> = game.into();
        assert_eq!(game.data.players.len(), 5);
        assert!(game.data.words.is_none());
        assert_eq!(game.state.index, 0);
    }

    #[test]
    fn test_enter_registration_auto_draws_words() {
        let mut game = setup(3);
        game.select_mode(GameMode::Auto);
        let game: Game<Registration> = game.into();
        let words = game.data.words.expect("auto mode draws before registration");
        assert_ne!(words.common, words.impostor);
    }
}
