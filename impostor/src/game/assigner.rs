//! Word drawing and impostor assignment.
//!
//! Auto mode draws from the built-in [`WORD_PAIRS`] table, custom mode
//! draws from the pool of words the players typed in. Both then hand the
//! impostor word to exactly one uniformly chosen player.

use log::{debug, warn};
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};

use super::{
    entities::{Difficulty, Player, PlayerIdx, WordPair, WordPairEntry},
    functional,
    state_machine::GameError,
    words::{WORD_PAIRS, entries_for},
};

/// Draw a pair from `table`, preferring medium entries, and randomly
/// decide which side of the pair the impostor gets.
pub fn draw_from_table<R: Rng + ?Sized>(
    rng: &mut R,
    table: &[WordPairEntry],
) -> Option<WordPair> {
    let entry = entries_for(table, Difficulty::Medium).choose(rng).copied()?;
    let pair = if rng.random_bool(0.5) {
        WordPair::new(entry.word1, entry.word2)
    } else {
        WordPair::new(entry.word2, entry.word1)
    };
    debug!("drew {} pair from the word table", entry.category);
    Some(pair)
}

/// Draw an auto-mode pair. Never fails: falls back to the default pair.
pub fn draw_auto_pair<R: Rng + ?Sized>(rng: &mut R) -> WordPair {
    draw_from_table(rng, WORD_PAIRS).unwrap_or_else(|| {
        warn!("word table is empty, using the fallback pair");
        WordPair::fallback()
    })
}

/// Every word contributed by the registered players, deduplicated.
#[must_use]
pub fn collect_pool(players: &[Player]) -> Vec<String> {
    functional::dedup_words(
        players
            .iter()
            .filter_map(|player| player.words.as_ref())
            .flatten(),
    )
}

/// Shuffle the pool and take the first two words.
pub fn draw_custom_pair<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[String],
) -> Result<WordPair, GameError> {
    let mut shuffled = functional::dedup_words(pool);
    if shuffled.len() < 2 {
        return Err(GameError::NotEnoughWords);
    }
    shuffled.shuffle(rng);
    let mut drawn = shuffled.into_iter();
    match (drawn.next(), drawn.next()) {
        (Some(common), Some(impostor)) => Ok(WordPair { common, impostor }),
        _ => Err(GameError::NotEnoughWords),
    }
}

/// Uniformly pick the impostor.
pub fn choose_impostor<R: Rng + ?Sized>(rng: &mut R, player_count: usize) -> PlayerIdx {
    rng.random_range(0..player_count)
}

/// Hand the impostor word to `impostor_idx` and the common word to
/// everybody else.
pub fn assign_words(players: &mut [Player], pair: &WordPair, impostor_idx: PlayerIdx) {
    for (idx, player) in players.iter_mut().enumerate() {
        let word = if idx == impostor_idx {
            &pair.impostor
        } else {
            &pair.common
        };
        player.word = Some(word.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Category, Difficulty};
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn players_with_words(words: &[(&str, &str)]) -> Vec<Player> {
        words
            .iter()
            .enumerate()
            .map(|(idx, (a, b))| {
                let mut player = Player::new(idx);
                player.words = Some([a.to_string(), b.to_string()]);
                player
            })
            .collect()
    }

    #[test]
    fn test_draw_auto_pair_is_from_table() {
        let mut rng = rng();
        for _ in 0..50 {
            let pair = draw_auto_pair(&mut rng);
            assert_ne!(pair.common, pair.impostor);
            assert!(WORD_PAIRS.iter().any(|entry| {
                (entry.word1 == pair.common && entry.word2 == pair.impostor)
                    || (entry.word2 == pair.common && entry.word1 == pair.impostor)
            }));
        }
    }

    #[test]
    fn test_draw_auto_pair_only_medium() {
        let mut rng = rng();
        for _ in 0..50 {
            let pair = draw_auto_pair(&mut rng);
            let matches_pair = |entry: &&WordPairEntry| {
                (entry.word1 == pair.common && entry.word2 == pair.impostor)
                    || (entry.word2 == pair.common && entry.word1 == pair.impostor)
            };
            assert!(
                WORD_PAIRS
                    .iter()
                    .filter(matches_pair)
                    .any(|entry| entry.difficulty == Difficulty::Medium)
            );
        }
    }

    #[test]
    fn test_draw_auto_pair_swaps_sides() {
        let table = [WordPairEntry {
            category: Category::Animals,
            difficulty: Difficulty::Medium,
            word1: "cat",
            word2: "dog",
        }];
        let mut rng = rng();
        let commons: Vec<_> = (0..64)
            .filter_map(|_| draw_from_table(&mut rng, &table))
            .map(|pair| pair.common)
            .collect();
        assert!(commons.iter().any(|word| word == "cat"));
        assert!(commons.iter().any(|word| word == "dog"));
    }

    #[test]
    fn test_draw_from_empty_table() {
        assert!(draw_from_table(&mut rng(), &[]).is_none());
    }

    #[test]
    fn test_collect_pool_dedups() {
        let players = players_with_words(&[("cup", "bag"), ("bag", "pen"), ("Cup", "lamp")]);
        assert_eq!(collect_pool(&players), vec!["cup", "bag", "pen", "lamp"]);
    }

    #[test]
    fn test_collect_pool_skips_players_without_words() {
        let mut players = players_with_words(&[("cup", "bag")]);
        players.push(Player::new(1));
        assert_eq!(collect_pool(&players), vec!["cup", "bag"]);
    }

    #[test]
    fn test_draw_custom_pair_not_enough_words() {
        let players = players_with_words(&[("a", "a"), ("a", "a"), ("a", "a")]);
        let pool = collect_pool(&players);
        assert_eq!(pool.len(), 1);
        assert_eq!(
            draw_custom_pair(&mut rng(), &pool),
            Err(GameError::NotEnoughWords)
        );
    }

    #[test]
    fn test_draw_custom_pair_two_words() {
        let pool = vec!["cup".to_string(), "bag".to_string()];
        let pair = draw_custom_pair(&mut rng(), &pool).unwrap();
        assert_ne!(pair.common, pair.impostor);
        assert!(pool.contains(&pair.common));
        assert!(pool.contains(&pair.impostor));
    }

    #[test]
    fn test_choose_impostor_in_range() {
        let mut rng = rng();
        for player_count in 3..=10 {
            for _ in 0..20 {
                assert!(choose_impostor(&mut rng, player_count) < player_count);
            }
        }
    }

    #[test]
    fn test_assign_words_single_impostor() {
        let mut players: Vec<_> = (0..5).map(Player::new).collect();
        let pair = WordPair::new("cat", "dog");

        assign_words(&mut players, &pair, 3);

        for (idx, player) in players.iter().enumerate() {
            let expected = if idx == 3 { "dog" } else { "cat" };
            assert_eq!(player.word.as_deref(), Some(expected));
        }
    }
}
