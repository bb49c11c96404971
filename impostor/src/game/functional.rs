//! Pure game rules. Nothing in here touches game state directly.

use std::time::Duration;

use super::{
    constants::{self, MAX_USER_INPUT_LENGTH},
    entities::{GameMode, Outcome, PlayerIdx, RegistrationStep},
    state_machine::GameError,
};

/// Normalize a player name: trimmed and capped at
/// [`MAX_USER_INPUT_LENGTH`] characters.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().chars().take(MAX_USER_INPUT_LENGTH).collect()
}

/// Normalize a custom word: trimmed and lowercased so that comparisons
/// are case-insensitive.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

pub fn validate_name(name: &str) -> Result<(), GameError> {
    if name.trim().is_empty() {
        return Err(GameError::MissingName);
    }
    Ok(())
}

pub fn validate_words(words: Option<&[String; constants::WORDS_PER_PLAYER]>) -> Result<(), GameError> {
    let Some([first, second]) = words else {
        return Err(GameError::MissingWords);
    };
    let (first, second) = (normalize_word(first), normalize_word(second));
    if first.is_empty() || second.is_empty() {
        return Err(GameError::MissingWords);
    }
    if first == second {
        return Err(GameError::DuplicateWords);
    }
    Ok(())
}

/// Fraction of registration completed once the current step is reached.
///
/// Custom mode has two steps per player, auto mode has one.
#[must_use]
pub fn registration_progress(
    mode: GameMode,
    index: PlayerIdx,
    step: RegistrationStep,
    player_count: usize,
) -> f64 {
    if player_count == 0 {
        return 0.0;
    }
    let (reached, total) = match mode {
        GameMode::Custom => (index * 2 + step.ordinal(), player_count * 2),
        GameMode::Auto => (index + 1, player_count),
    };
    reached as f64 / total as f64
}

/// Progress label shown above the registration form.
#[must_use]
pub fn registration_label(
    mode: GameMode,
    index: PlayerIdx,
    step: RegistrationStep,
    player_count: usize,
) -> String {
    match mode {
        GameMode::Custom => format!("Player {} of {player_count} - {step}", index + 1),
        GameMode::Auto => format!("Player {} of {player_count}", index + 1),
    }
}

/// Deduplicate words while keeping first-occurrence order.
#[must_use]
pub fn dedup_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pool: Vec<String> = Vec::new();
    for word in words {
        let word = normalize_word(word.as_ref());
        if !word.is_empty() && !pool.contains(&word) {
            pool.push(word);
        }
    }
    pool
}

/// A single vote decides the round.
#[must_use]
pub fn evaluate_guess(selected: PlayerIdx, impostor: PlayerIdx) -> Outcome {
    if selected == impostor {
        Outcome::CiviliansWin
    } else {
        Outcome::ImpostorWins
    }
}

/// Render a clock reading as `MM:SS`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[must_use]
pub fn is_overtime(elapsed: Duration) -> bool {
    elapsed > constants::OVERTIME_AFTER
}
