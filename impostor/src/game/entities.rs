use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

use super::constants;

/// Type alias for a player's position in the registration order.
pub type PlayerIdx = usize;

/// Where the round's words come from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Words are drawn from the built-in pair table.
    Auto,
    /// Every player contributes two words to a shared pool.
    Custom,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Auto => "auto",
            Self::Custom => "custom",
        };
        write!(f, "{repr}")
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("unknown game mode '{0}', expected 'auto' or 'custom'")]
pub struct UnknownModeError(pub String);

impl FromStr for GameMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "custom" => Ok(Self::Custom),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// The six phases a game moves through. Exactly one is current at any
/// time.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Phase {
    Setup,
    Registration,
    WordReveal,
    Discussion,
    Guess,
    Result,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Setup => "setup",
            Self::Registration => "registration",
            Self::WordReveal => "word reveal",
            Self::Discussion => "discussion",
            Self::Guess => "guess",
            Self::Result => "result",
        };
        write!(f, "{repr}")
    }
}

/// Which half of a player's registration is being filled in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RegistrationStep {
    /// Name and optional photo.
    #[default]
    Name,
    /// Two custom words (custom mode only).
    Words,
}

impl RegistrationStep {
    /// 1-based position of the step within a player's registration.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Name => 1,
            Self::Words => 2,
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Name => "Name & Photo",
            Self::Words => "Words",
        };
        write!(f, "{repr}")
    }
}

/// Opaque image handle supplied by the camera collaborator (a path,
/// URI or data URL). The game never looks inside it.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Avatar(String);

impl Avatar {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerIdx,
    pub name: String,
    pub avatar: Option<Avatar>,
    /// The word assigned for the current round.
    pub word: Option<String>,
    /// The two words contributed in custom mode.
    pub words: Option<[String; constants::WORDS_PER_PLAYER]>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerIdx) -> Self {
        Self {
            id,
            name: String::new(),
            avatar: None,
            word: None,
            words: None,
        }
    }

    /// Forget the assigned word, keeping everything typed at registration.
    pub fn reset(&mut self) {
        self.word = None;
    }

    /// Forget the contributed words as well as the assigned word.
    pub fn clear_words(&mut self) {
        self.word = None;
        if self.words.is_some() {
            self.words = Some(Default::default());
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Objects,
    Food,
    Places,
    Animals,
    Actions,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Objects => "objects",
            Self::Food => "food",
            Self::Places => "places",
            Self::Animals => "animals",
            Self::Actions => "actions",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A row of the built-in word table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct WordPairEntry {
    pub category: Category,
    pub difficulty: Difficulty,
    pub word1: &'static str,
    pub word2: &'static str,
}

/// The two words in play for a round.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WordPair {
    pub common: String,
    pub impostor: String,
}

impl WordPair {
    pub fn new(common: impl Into<String>, impostor: impl Into<String>) -> Self {
        Self {
            common: common.into(),
            impostor: impostor.into(),
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        let (common, impostor) = constants::FALLBACK_PAIR;
        Self::new(common, impostor)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "common: {}, impostor: {}",
            self.common.to_uppercase(),
            self.impostor.to_uppercase()
        )
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Outcome {
    /// The group accused the impostor.
    CiviliansWin,
    /// The group accused somebody else.
    ImpostorWins,
}

impl Outcome {
    #[must_use]
    pub const fn civilians_won(self) -> bool {
        matches!(self, Self::CiviliansWin)
    }

    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::CiviliansWin => Cue::Win,
            Self::ImpostorWins => Cue::Lose,
        }
    }

    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::CiviliansWin => "You Found the Impostor!",
            Self::ImpostorWins => "The Impostor Won!",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::CiviliansWin => "Great detective work!",
            Self::ImpostorWins => "The impostor fooled everyone!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::CiviliansWin => "civilians win",
            Self::ImpostorWins => "impostor wins",
        };
        write!(f, "{repr}")
    }
}

/// Named sound/celebration hooks. Collaborators treat them as
/// fire-and-forget.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Click,
    Reveal,
    Win,
    Lose,
    Success,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Click => "click",
            Self::Reveal => "reveal",
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Success => "success",
        };
        write!(f, "{repr}")
    }
}

/// How densely player cards are laid out for a given table size.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GridDensity {
    Few,
    Medium,
    Many,
}

impl GridDensity {
    #[must_use]
    pub const fn for_player_count(player_count: usize) -> Self {
        match player_count {
            0..=4 => Self::Few,
            5..=6 => Self::Medium,
            _ => Self::Many,
        }
    }

    /// Number of cards per row.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Few => 2,
            Self::Medium => 3,
            Self::Many => 4,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: PlayerIdx,
    pub name: String,
    pub avatar: Option<Avatar>,
    pub revealed: bool,
    /// Only known once the round is over.
    pub is_impostor: Option<bool>,
    /// Only the impostor's word is shown, and only once the round is over.
    pub word: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegistrationView {
    pub index: PlayerIdx,
    pub step: RegistrationStep,
    /// Fraction of registration steps reached, in `(0, 1]`.
    pub progress: f64,
    pub label: String,
    pub name: String,
    pub words: Option<[String; constants::WORDS_PER_PLAYER]>,
    pub can_submit: bool,
    pub is_last: bool,
}

/// A word currently shown to a single player.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RevealView {
    pub player: PlayerIdx,
    pub word: String,
}

/// Everything a renderer needs to draw the current phase.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub player_count: usize,
    pub mode: Option<GameMode>,
    pub density: GridDensity,
    pub players: Vec<PlayerView>,
    pub registration: Option<RegistrationView>,
    pub revealing: Option<RevealView>,
    /// Player who just hid their word and is passing the device on.
    pub passing: Option<PlayerIdx>,
    pub discussion_elapsed: Option<Duration>,
    pub selected: Option<PlayerIdx>,
    pub outcome: Option<Outcome>,
    pub words: Option<WordPair>,
}
