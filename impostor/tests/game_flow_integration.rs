/// Integration tests for whole rounds
///
/// These drive the public state machine the way the terminal client does:
/// perform an action, then `step()` to apply whatever transition it allows.
use impostor::{
    GameError, GameEvent, GameMode, GameSettings, GameStateManagement, ImpostorState, Outcome,
    Phase,
};

fn new_game(player_count: usize, mode: GameMode, seed: u64) -> ImpostorState {
    let mut game = ImpostorState::from(GameSettings::new(player_count, None, Some(seed)));
    game.select_mode(mode).unwrap();
    game.start_game().unwrap();
    game.step()
}

fn register_auto(mut game: ImpostorState, names: &[&str]) -> ImpostorState {
    for name in names {
        assert_eq!(game.phase(), Phase::Registration);
        game.set_name(name).unwrap();
        game.advance().unwrap();
        game = game.step();
    }
    game
}

fn register_custom(mut game: ImpostorState, players: &[(&str, &str, &str)]) -> ImpostorState {
    for (name, first, second) in players {
        game.set_name(name).unwrap();
        game.advance().unwrap();
        game.set_word(0, first).unwrap();
        game.set_word(1, second).unwrap();
        game.advance().unwrap();
        game = game.step();
    }
    game
}

fn reveal_all(mut game: ImpostorState) -> ImpostorState {
    let player_count = game.data().players.len();
    for idx in 0..player_count {
        game.reveal_word(idx).unwrap();
        let deferred = game.hide_word().unwrap();
        assert!(game.fire(deferred));
        game = game.step();
    }
    game
}

fn accuse(game: ImpostorState, suspect: usize) -> ImpostorState {
    let mut game = game;
    game.start_guess().unwrap();
    let mut game = game.step();
    game.select_impostor(suspect).unwrap();
    game.confirm_guess().unwrap();
    game.step()
}

#[test]
fn test_auto_round_wrong_guess() {
    let game = new_game(4, GameMode::Auto, 1);
    let game = register_auto(game, &["alice", "bob", "carol", "dave"]);
    assert_eq!(game.phase(), Phase::WordReveal);

    let game = reveal_all(game);
    assert_eq!(game.phase(), Phase::Discussion);

    let impostor = game.data().impostor_idx.unwrap();
    let game = accuse(game, (impostor + 1) % 4);
    let view = game.get_view();
    assert_eq!(view.phase, Phase::Result);
    assert_eq!(view.outcome, Some(Outcome::ImpostorWins));
    assert_eq!(view.players[impostor].is_impostor, Some(true));
}

#[test]
fn test_every_player_sees_a_word_and_one_differs() {
    let game = register_auto(new_game(5, GameMode::Auto, 2), &["a", "b", "c", "d", "e"]);
    let words = game.data().words.clone().unwrap();
    let impostors = game
        .data()
        .players
        .iter()
        .filter(|player| player.word.as_deref() == Some(words.impostor.as_str()))
        .count();
    let civilians = game
        .data()
        .players
        .iter()
        .filter(|player| player.word.as_deref() == Some(words.common.as_str()))
        .count();
    assert_eq!(impostors, 1);
    assert_eq!(civilians, 4);
}

#[test]
fn test_custom_play_again_goes_straight_to_reveal() {
    let game = new_game(3, GameMode::Custom, 3);
    let game = register_custom(
        game,
        &[
            ("alice", "cup", "bag"),
            ("bob", "pen", "lamp"),
            ("carol", "Cup", "desk"),
        ],
    );
    assert_eq!(game.phase(), Phase::WordReveal);
    assert_eq!(game.data().word_pool.len(), 5);

    let mut game = accuse(reveal_all(game), 0);
    let epoch = game.data().epoch();
    game.play_again().unwrap();
    let game = game.step();

    assert_eq!(game.phase(), Phase::WordReveal);
    assert_ne!(game.data().epoch(), epoch);
    assert_eq!(game.data().players[2].name, "carol");
    let view = game.get_view();
    assert!(view.players.iter().all(|player| !player.revealed));
}

#[test]
fn test_auto_play_again_registers_with_names_prefilled() {
    let game = register_auto(new_game(3, GameMode::Auto, 4), &["alice", "bob", "carol"]);
    let mut game = accuse(reveal_all(game), 1);
    game.play_again().unwrap();
    let game = game.step();

    assert_eq!(game.phase(), Phase::Registration);
    let view = game.get_view();
    let registration = view.registration.unwrap();
    assert_eq!(registration.index, 0);
    assert_eq!(registration.name, "alice");
    assert!(registration.can_submit);
}

#[test]
fn test_change_words_in_custom_mode_starts_from_scratch() {
    let game = new_game(3, GameMode::Custom, 5);
    let game = register_custom(
        game,
        &[("a", "x", "y"), ("b", "x", "z"), ("c", "w", "v")],
    );
    let mut game = accuse(reveal_all(game), 2);
    game.change_words().unwrap();
    let mut game = game.step();

    assert_eq!(game.phase(), Phase::Registration);
    assert!(game.data().word_pool.is_empty());
    assert!(game.data().players.iter().all(|player| player.name.is_empty()));
    assert!(game.drain_events().contains(&GameEvent::WordsCleared));
}

#[test]
fn test_stale_deferral_after_phase_change() {
    let mut game = register_auto(new_game(3, GameMode::Auto, 6), &["a", "b", "c"]);
    let mut last = None;
    for idx in 0..3 {
        game.reveal_word(idx).unwrap();
        let deferred = game.hide_word().unwrap();
        assert!(game.fire(deferred));
        last = Some(deferred);
    }
    let mut game = game.step();
    assert_eq!(game.phase(), Phase::Discussion);
    assert!(!game.fire(last.unwrap()));
    assert_eq!(game.phase(), Phase::Discussion);
}

#[test]
fn test_reveal_rules_enforced() {
    let mut game = register_auto(new_game(3, GameMode::Auto, 7), &["a", "b", "c"]);
    game.reveal_word(0).unwrap();
    assert_eq!(game.reveal_word(1), Err(GameError::RevealInProgress));
    let deferred = game.hide_word().unwrap();
    assert_eq!(game.hide_word(), Err(GameError::NoRevealOpen));
    game.fire(deferred);
    assert_eq!(game.reveal_word(0), Err(GameError::AlreadyRevealed(0)));

    let game = game.step();
    assert_eq!(game.phase(), Phase::WordReveal);
}

#[test]
fn test_new_game_restores_settings() {
    let game = register_auto(new_game(3, GameMode::Auto, 8), &["a", "b", "c"]);
    let mut game = accuse(reveal_all(game), 0);
    game.new_game().unwrap();
    let mut game = game.step();

    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.data().mode, None);
    assert_eq!(game.start_game(), Err(GameError::ModeRequired));
}

#[test]
fn test_wrong_phase_actions_leave_state_untouched() {
    let mut game = new_game(3, GameMode::Auto, 9);
    assert_eq!(
        game.select_impostor(0),
        Err(GameError::InvalidAction(Phase::Registration))
    );
    assert_eq!(
        game.increase_players(),
        Err(GameError::InvalidAction(Phase::Registration))
    );
    let game = game.step();
    assert_eq!(game.phase(), Phase::Registration);
}

#[test]
fn test_custom_two_distinct_words_is_enough() {
    let game = new_game(3, GameMode::Custom, 11);
    let game = register_custom(
        game,
        &[
            ("ann", "cup", "bag"),
            ("bob", "bag", "cup"),
            ("cat", "Cup", "BAG"),
        ],
    );
    assert_eq!(game.phase(), Phase::WordReveal);
    assert_eq!(game.data().word_pool, vec!["cup", "bag"]);

    let words = game.data().words.clone().unwrap();
    let mut drawn = vec![words.common.as_str(), words.impostor.as_str()];
    drawn.sort_unstable();
    assert_eq!(drawn, ["bag", "cup"]);
}
