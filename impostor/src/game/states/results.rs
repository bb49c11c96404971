use log::{debug, info};

use crate::game::{
    assigner,
    entities::GameMode,
    state_machine::{Game, GameEvent},
};

use super::{NextRound, Registration, Results, Setup, WordReveal, enter_registration};

impl Game<Results> {
    pub fn play_again(&mut self) {
        self.state.next = Some(NextRound::PlayAgain);
    }

    pub fn change_words(&mut self) {
        self.state.next = Some(NextRound::ChangeWords);
    }

    pub fn new_game(&mut self) {
        self.state.next = Some(NextRound::NewGame);
    }

    #[must_use]
    pub const fn next_round(&self) -> Option<NextRound> {
        self.state.next
    }
}

/// Where a "play again" lands: straight back to the reveal when custom
/// words are left to re-draw from, otherwise back to registration.
pub(crate) enum Rematch {
    Reveal(Game<WordReveal>),
    Register(Game<Registration>),
}

impl From<Game<Results>> for Rematch {
    fn from(mut value: Game<Results>) -> Self {
        value.data.reset_round();
        value.data.push_event(GameEvent::NewRound);
        if value.data.mode == Some(GameMode::Custom) {
            let drawn = assigner::draw_custom_pair(&mut value.data.rng, &value.data.word_pool);
            match drawn {
                Ok(pair) => {
                    debug!("re-drew from a pool of {}", value.data.word_pool.len());
                    value.data.words = Some(pair);
                    value.data.deal();
                    return Self::Reveal(Game {
                        data: value.data,
                        state: WordReveal::default(),
                    });
                }
                Err(_) => {
                    info!("custom word pool exhausted");
                    value.data.words = None;
                    value.data.push_event(GameEvent::PoolExhausted);
                }
            }
        }
        Self::Register(enter_registration(value.data))
    }
}

/// Clear every word and register again. Auto mode keeps the players'
/// names, custom mode starts over with blank players.
pub(crate) fn change_words(mut value: Game<Results>) -> Game<Registration> {
    let data = &mut value.data;
    data.reset_round();
    data.word_pool.clear();
    data.words = None;
    if data.mode == Some(GameMode::Custom) {
        data.players.clear();
    } else {
        for player in &mut data.players {
            player.clear_words();
        }
    }
    data.push_event(GameEvent::WordsCleared);
    enter_registration(value.data)
}

impl From<Game<Results>> for Game<Setup> {
    fn from(mut value: Game<Results>) -> Self {
        value.data.reset_all();
        value.data.push_event(GameEvent::NewGame);
        Self {
            data: value.data,
            state: Setup::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::{
        entities::{Outcome, WordPair},
        state_machine::{GameData, GameSettings},
    };

    fn results(mode: GameMode, pool: &[&str]) -> Game<Results> {
        let mut data = GameData::from(GameSettings::new(3, Some(mode), Some(17)));
        data.ensure_players();
        for (idx, player) in data.players.iter_mut().enumerate() {
            player.name = format!("p{idx}");
        }
        data.word_pool = pool.iter().map(ToString::to_string).collect();
        data.words = Some(WordPair::new("cat", "dog"));
        data.deal();
        Game {
            data,
            state: Results {
                outcome: Outcome::CiviliansWin,
                accused: 0,
                discussion_time: Duration::from_secs(30),
                next: None,
            },
        }
    }

    #[test]
    fn test_next_round_recorded() {
        let mut game = results(GameMode::Auto, &[]);
        assert_eq!(game.next_round(), None);
        game.play_again();
        assert_eq!(game.next_round(), Some(NextRound::PlayAgain));
        game.new_game();
        assert_eq!(game.next_round(), Some(NextRound::NewGame));
    }

    #[test]
    fn test_custom_rematch_skips_registration() {
        let game = results(GameMode::Custom, &["cup", "bag", "pen"]);
        match Rematch::from(game) {
            Rematch::Reveal(game) => {
                let words = game.data.words.clone().unwrap();
                assert!(["cup", "bag", "pen"].contains(&words.common.as_str()));
                assert!(game.data.impostor_idx.is_some());
                assert_eq!(game.data.players[1].name, "p1");
                assert!(game.state.revealed.is_empty());
            }
            Rematch::Register(_) => panic!("expected a straight re-deal"),
        }
    }

    #[test]
    fn test_custom_rematch_with_small_pool_registers_again() {
        let game = results(GameMode::Custom, &["cup"]);
        match Rematch::from(game) {
            Rematch::Register(game) => {
                assert!(game.data.events.contains(&GameEvent::PoolExhausted));
                assert!(game.data.words.is_none());
            }
            Rematch::Reveal(_) => panic!("pool of one word can't be re-drawn"),
        }
    }

    #[test]
    fn test_auto_rematch_keeps_names() {
        let game = results(GameMode::Auto, &[]);
        match Rematch::from(game) {
            Rematch::Register(game) => {
                assert_eq!(game.data.players[2].name, "p2");
                assert!(game.data.players.iter().all(|player| player.word.is_none()));
                assert!(game.data.words.is_some());
                assert!(game.data.impostor_idx.is_none());
            }
            Rematch::Reveal(_) => panic!("auto mode registers again"),
        }
    }

    #[test]
    fn test_change_words_custom_clears_players() {
        let game = results(GameMode::Custom, &["cup", "bag"]);
        let game = change_words(game);
        assert!(game.data.word_pool.is_empty());
        assert!(game.data.words.is_none());
        assert!(game.data.players.iter().all(|player| player.name.is_empty()));
        assert_eq!(game.data.players.len(), 3);
    }

    #[test]
    fn test_change_words_auto_keeps_names() {
        let game = results(GameMode::Auto, &[]);
        let game = change_words(game);
        assert_eq!(game.data.players[0].name, "p0");
        assert!(game.data.events.contains(&GameEvent::WordsCleared));
    }

    #[test]
    fn test_new_game_resets() {
        let game = results(GameMode::Custom, &["cup", "bag"]);
        let game: Game<Setup> = game.into();
        assert!(game.data.players.is_empty());
        assert!(game.data.word_pool.is_empty());
        assert_eq!(game.data.player_count, 3);
        assert!(game.data.events.contains(&GameEvent::NewGame));
    }
}
