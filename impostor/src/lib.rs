//! # Impostor
//!
//! A pass-and-play "find the impostor" word game implemented as a
//! type-safe finite state machine (FSM).
//!
//! One device is passed around the table. Every player privately views a
//! secret word; all of them share the same common word except for one
//! randomly chosen impostor. The group then discusses and votes on who
//! they think the impostor is.
//!
//! ## Architecture
//!
//! The game consists of 6 distinct phases (states):
//!
//! - **Setup**: Choosing the player count and word mode
//! - **Registration**: Collecting player names, photos and (custom mode) words
//! - **WordReveal**: Each player privately views their word
//! - **Discussion**: The group talks it over while a clock runs
//! - **Guess**: The group accuses a single player
//! - **Result**: The impostor is revealed and a new round can begin
//!
//! The result phase loops back to word reveal, registration or setup, so
//! the machine is cyclic. Every transition is an explicit, owned value
//! flowing through [`ImpostorState::step`]; there is no global state and
//! rendering is a pure function of the current state
//! ([`GameStateManagement::get_view`]).
//!
//! ## Core Modules
//!
//! - [`game`]: Game state machine, entities, word assignment and timers
//! - [`storage`]: Client-local preferences (the "tutorial seen" flag)
//!
//! ## Example
//!
//! ```
//! use impostor::{GameMode, GameStateManagement, ImpostorState, Phase};
//!
//! let mut game = ImpostorState::new();
//! game.select_mode(GameMode::Auto).unwrap();
//! game.start_game().unwrap();
//! let game = game.step();
//! assert_eq!(game.phase(), Phase::Registration);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameData, GameError, GameEvent, GameSettings, GameStateManagement, ImpostorState,
    assigner,
    constants::{self, DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS},
    entities::{
        self, Avatar, Cue, GameMode, GameView, GridDensity, Outcome, Phase, Player, PlayerIdx,
        RegistrationStep, WordPair,
    },
    functional,
    timers::{self, CancelToken, Deferred, DeferredAction, DiscussionClock, TimerQueue},
    words,
};

/// Client-local key/value preferences.
pub mod storage;
pub use storage::{FileStore, KeyValueStore, MemoryStore, Preferences, StorageError};
