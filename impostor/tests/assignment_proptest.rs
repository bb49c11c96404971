/// Property-based tests for word drawing and impostor assignment
///
/// Whatever the seed, player count or custom pool, a dealt round has
/// exactly one impostor and the two words differ.
use impostor::{
    MAX_PLAYERS, MIN_PLAYERS, Player,
    assigner::{assign_words, choose_impostor, collect_pool, draw_auto_pair, draw_custom_pair},
    functional::{dedup_words, evaluate_guess, format_elapsed},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::{collections::BTreeSet, time::Duration};

// Short lowercase words so pools regularly contain duplicates
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn players_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((word_strategy(), word_strategy()), MIN_PLAYERS..=MAX_PLAYERS).prop_map(
        |words| {
            words
                .into_iter()
                .enumerate()
                .map(|(idx, (first, second))| {
                    let mut player = Player::new(idx);
                    player.words = Some([first, second]);
                    player
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn test_exactly_one_impostor(seed in any::<u64>(), player_count in MIN_PLAYERS..=MAX_PLAYERS) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pair = draw_auto_pair(&mut rng);
        let impostor = choose_impostor(&mut rng, player_count);
        let mut players: Vec<_> = (0..player_count).map(Player::new).collect();

        assign_words(&mut players, &pair, impostor);

        prop_assert!(impostor < player_count);
        prop_assert_ne!(&pair.common, &pair.impostor);
        let impostors: Vec<_> = players
            .iter()
            .filter(|player| player.word.as_deref() == Some(pair.impostor.as_str()))
            .map(|player| player.id)
            .collect();
        prop_assert_eq!(impostors, vec![impostor]);
        prop_assert!(players.iter().all(|player| player.word.is_some()));
    }

    #[test]
    fn test_custom_pair_comes_from_pool(seed in any::<u64>(), players in players_strategy()) {
        let pool = collect_pool(&players);
        let mut rng = StdRng::seed_from_u64(seed);
        match draw_custom_pair(&mut rng, &pool) {
            Ok(pair) => {
                prop_assert!(pool.len() >= 2);
                prop_assert_ne!(&pair.common, &pair.impostor);
                prop_assert!(pool.contains(&pair.common));
                prop_assert!(pool.contains(&pair.impostor));
            }
            Err(_) => prop_assert!(pool.len() < 2),
        }
    }

    #[test]
    fn test_pool_has_no_duplicates(players in players_strategy()) {
        let pool = collect_pool(&players);
        let unique: BTreeSet<_> = pool.iter().collect();
        prop_assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence(words in prop::collection::vec(word_strategy(), 0..20)) {
        let deduped = dedup_words(&words);
        let mut seen = BTreeSet::new();
        let expected: Vec<_> = words.iter().filter(|word| seen.insert(word.as_str())).cloned().collect();
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn test_guess_wins_iff_impostor(selected in 0usize..10, impostor in 0usize..10) {
        prop_assert_eq!(evaluate_guess(selected, impostor).civilians_won(), selected == impostor);
    }

    #[test]
    fn test_elapsed_format_shape(secs in 0u64..6000) {
        let formatted = format_elapsed(Duration::from_secs(secs));
        prop_assert_eq!(formatted.len(), 5);
        prop_assert_eq!(&formatted[2..3], ":");
        let minutes: u64 = formatted[..2].parse().unwrap();
        let seconds: u64 = formatted[3..].parse().unwrap();
        prop_assert_eq!(minutes * 60 + seconds, secs);
    }
}

#[test]
fn test_impostor_seat_is_uniform_for_every_table_size() {
    const TRIALS_PER_SEAT: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1234);
    for player_count in MIN_PLAYERS..=MAX_PLAYERS {
        let mut counts = vec![0usize; player_count];
        for _ in 0..TRIALS_PER_SEAT * player_count {
            counts[choose_impostor(&mut rng, player_count)] += 1;
        }
        // Every seat lands within half of its fair share either way
        for (seat, count) in counts.into_iter().enumerate() {
            assert!(
                (TRIALS_PER_SEAT / 2..=TRIALS_PER_SEAT * 3 / 2).contains(&count),
                "seat {seat} of {player_count} chosen {count} times"
            );
        }
    }
}
