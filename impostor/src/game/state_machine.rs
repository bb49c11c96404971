//! Impostor game state machine plumbing.
//!
//! It provides the error and event types, the settings, the data shared by
//! every phase, and the trait each phase implements for views and events.

use enum_dispatch::enum_dispatch;
use log::{debug, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, time::Duration};
use thiserror::Error;

use super::{
    assigner,
    constants::{DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS, PASS_DEVICE_DELAY},
    entities::{
        Cue, GameMode, GameView, GridDensity, Outcome, Phase, Player, PlayerIdx, PlayerView,
        WordPair,
    },
    timers::Epoch,
};

/// Errors surfaced to the players. None of them are fatal; the game is
/// left untouched and the players can correct their input.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("please select a game mode")]
    ModeRequired,
    #[error("please enter a name for this player")]
    MissingName,
    #[error("please enter both words for this player")]
    MissingWords,
    #[error("please enter two different words")]
    DuplicateWords,
    #[error("please enter at least 2 different words across all players")]
    NotEnoughWords,
    #[error("could not access camera, you can continue without a photo")]
    CameraUnavailable,
    #[error("need 3 to 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("there's no player {}", .0 + 1)]
    InvalidPlayerIndex(PlayerIdx),
    #[error("player {} already saw their word", .0 + 1)]
    AlreadyRevealed(PlayerIdx),
    #[error("wait for the device to be passed on")]
    RevealInProgress,
    #[error("no word is showing")]
    NoRevealOpen,
    #[error("pick a suspect first")]
    NoSuspectSelected,
    #[error("can't do that during {0}")]
    InvalidAction(Phase),
}

impl GameError {
    /// Short heading for the dialog the error is shown in.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ModeRequired => "Mode Required",
            Self::MissingName => "Missing Name",
            Self::MissingWords => "Missing Words",
            Self::DuplicateWords => "Duplicate Words",
            Self::NotEnoughWords => "Not Enough Words",
            Self::CameraUnavailable => "Camera Access",
            Self::InvalidPlayerCount(_) => "Player Count",
            Self::InvalidPlayerIndex(_) | Self::AlreadyRevealed(_) => "Invalid Player",
            Self::RevealInProgress | Self::NoRevealOpen => "Pass the Device",
            Self::NoSuspectSelected => "No Suspect",
            Self::InvalidAction(_) => "Not Allowed",
        }
    }
}

/// Events that occur during gameplay
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GameEvent {
    PlayerCountChanged(usize),
    ModeSelected(GameMode),
    WordsDrawn(GameMode),
    FallbackWords,
    PlayerRegistered(String),
    RegistrationComplete,
    WordRevealed(String),
    PassDevice(String),
    AllRevealed,
    SuspectSelected(String),
    GuessConfirmed(String),
    RoundOver(Outcome),
    NewRound,
    PoolExhausted,
    WordsCleared,
    NewGame,
}

impl GameEvent {
    /// Sound/celebration cue associated with the event, if any.
    #[must_use]
    pub const fn cue(&self) -> Option<Cue> {
        match self {
            Self::PlayerCountChanged(_)
            | Self::ModeSelected(_)
            | Self::SuspectSelected(_)
            | Self::NewRound
            | Self::WordsCleared
            | Self::NewGame => Some(Cue::Click),
            Self::WordRevealed(_) => Some(Cue::Reveal),
            Self::PlayerRegistered(_) | Self::RegistrationComplete | Self::GuessConfirmed(_) => {
                Some(Cue::Success)
            }
            Self::RoundOver(outcome) => Some(outcome.cue()),
            Self::WordsDrawn(_)
            | Self::FallbackWords
            | Self::PassDevice(_)
            | Self::AllRevealed
            | Self::PoolExhausted => None,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::PlayerCountChanged(count) => format!("{count} players"),
            Self::ModeSelected(mode) => format!("{mode} mode selected"),
            Self::WordsDrawn(mode) => format!("new words drawn ({mode} mode)"),
            Self::FallbackWords => "using the default word pair".to_string(),
            Self::PlayerRegistered(name) => format!("{name} registered"),
            Self::RegistrationComplete => "everyone's registered".to_string(),
            Self::WordRevealed(name) => format!("{name} is looking at their word"),
            Self::PassDevice(name) => format!("{name}, pass the device on"),
            Self::AllRevealed => "everyone has seen their word".to_string(),
            Self::SuspectSelected(name) => format!("{name} is under suspicion"),
            Self::GuessConfirmed(name) => format!("the group accused {name}"),
            Self::RoundOver(outcome) => format!("round over: {outcome}"),
            Self::NewRound => "new round with the same players".to_string(),
            Self::PoolExhausted => "not enough words left, re-registering".to_string(),
            Self::WordsCleared => "words cleared".to_string(),
            Self::NewGame => "new game".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// Game configuration settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameSettings {
    pub player_count: usize,
    pub mode: Option<GameMode>,
    /// Fixes the random draws. Random from the OS when unset.
    pub seed: Option<u64>,
    pub pass_device_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYERS, None, None)
    }
}

impl GameSettings {
    #[must_use]
    pub const fn new(player_count: usize, mode: Option<GameMode>, seed: Option<u64>) -> Self {
        Self {
            player_count,
            mode,
            seed,
            pass_device_delay: PASS_DEVICE_DELAY,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

/// Mutable game data shared across all phases
#[derive(Debug)]
pub struct GameData {
    pub player_count: usize,
    pub mode: Option<GameMode>,
    /// Deduplicated custom-mode words, kept between rounds for re-draws.
    pub word_pool: Vec<String>,
    pub words: Option<WordPair>,
    pub players: Vec<Player>,
    pub impostor_idx: Option<PlayerIdx>,
    /// Queue of game events that give more insight as to what kind of
    /// game updates occur due to player actions or phase changes.
    pub(super) events: VecDeque<GameEvent>,
    pub(super) epoch: Epoch,
    pub(super) rng: StdRng,
    pub(super) settings: GameSettings,
}

impl Default for GameData {
    fn default() -> Self {
        GameSettings::default().into()
    }
}

impl GameData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        debug!("{event}");
        self.events.push_back(event);
    }

    /// Make sure there's exactly one player record per seat, keeping
    /// whatever was already registered.
    pub(super) fn ensure_players(&mut self) {
        if self.players.len() != self.player_count {
            self.players = (0..self.player_count).map(Player::new).collect();
        }
    }

    pub(super) fn draw_auto_words(&mut self) {
        self.words = Some(assigner::draw_auto_pair(&mut self.rng));
        self.push_event(GameEvent::WordsDrawn(GameMode::Auto));
    }

    /// Pick the impostor and hand out this round's words.
    pub(super) fn deal(&mut self) {
        let pair = match self.words.clone() {
            Some(pair) => pair,
            None => {
                warn!("dealing without drawn words, using the fallback pair");
                self.push_event(GameEvent::FallbackWords);
                let pair = WordPair::fallback();
                self.words = Some(pair.clone());
                pair
            }
        };
        let impostor_idx = assigner::choose_impostor(&mut self.rng, self.players.len());
        assigner::assign_words(&mut self.players, &pair, impostor_idx);
        self.impostor_idx = Some(impostor_idx);
        debug!("dealt words to {} players", self.players.len());
    }

    /// Clear per-round data, keeping players and the word pool.
    pub(super) fn reset_round(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.impostor_idx = None;
    }

    /// Go back to the configured defaults, keeping the random source,
    /// epoch and pending events.
    pub(super) fn reset_all(&mut self) {
        let fresh = Self::from(self.settings.clone());
        let events = std::mem::take(&mut self.events);
        let rng = std::mem::replace(&mut self.rng, fresh.rng);
        *self = Self {
            events,
            epoch: self.epoch,
            rng,
            ..fresh
        };
    }

    pub(super) fn player_name(&self, idx: PlayerIdx) -> String {
        self.players
            .get(idx)
            .map_or_else(|| format!("Player {}", idx + 1), |player| player.name.clone())
    }
}

impl From<GameSettings> for GameData {
    fn from(value: GameSettings) -> Self {
        let rng = value
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            player_count: value.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS),
            mode: value.mode,
            word_pool: Vec::new(),
            words: None,
            players: Vec::with_capacity(MAX_PLAYERS),
            impostor_idx: None,
            events: VecDeque::new(),
            epoch: Epoch::default(),
            rng,
            settings: value,
        }
    }
}

/// Trait for managing game state (views, events)
#[enum_dispatch]
pub trait GameStateManagement {
    fn drain_events(&mut self) -> VecDeque<GameEvent>;

    fn phase(&self) -> Phase;

    fn data(&self) -> &GameData;

    fn data_mut(&mut self) -> &mut GameData;

    /// Get the render view for the current phase
    ///
    /// # Important
    /// This function's return value should be used - ignoring it wastes computation
    #[must_use]
    fn get_view(&self) -> GameView;
}

/// Per-phase state. Each phase adds its own details to the shared view.
pub trait PhaseState {
    const PHASE: Phase;

    fn decorate_view(&self, _data: &GameData, _view: &mut GameView) {}
}

/// An impostor game with data and logic for running rounds end-to-end.
///
/// This struct wraps game data and the current phase, providing the core
/// game loop functionality.
#[derive(Debug)]
pub struct Game<T> {
    pub data: GameData,
    pub state: T,
}

impl<T: PhaseState> GameStateManagement for Game<T> {
    fn drain_events(&mut self) -> VecDeque<GameEvent> {
        std::mem::take(&mut self.data.events)
    }

    fn phase(&self) -> Phase {
        T::PHASE
    }

    fn data(&self) -> &GameData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }

    fn get_view(&self) -> GameView {
        let players = self
            .data
            .players
            .iter()
            .map(|player| PlayerView {
                id: player.id,
                name: player.name.clone(),
                avatar: player.avatar.clone(),
                revealed: false,
                is_impostor: None,
                word: None,
            })
            .collect();
        let mut view = GameView {
            phase: T::PHASE,
            player_count: self.data.player_count,
            mode: self.data.mode,
            density: GridDensity::for_player_count(self.data.player_count),
            players,
            registration: None,
            revealing: None,
            passing: None,
            discussion_elapsed: None,
            selected: None,
            outcome: None,
            words: None,
        };
        self.state.decorate_view(&self.data, &mut view);
        view
    }
}
