use std::time::Duration;

/// Fewest players a round can be played with.
pub const MIN_PLAYERS: usize = 3;
/// Most players a round can be played with.
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_PLAYERS: usize = 4;

/// Names are truncated to this many characters.
pub const MAX_USER_INPUT_LENGTH: usize = 32;

/// Number of words each player contributes in custom mode.
pub const WORDS_PER_PLAYER: usize = 2;

/// Pause between a player hiding their word and the next player being
/// able to pick up the device.
pub const PASS_DEVICE_DELAY: Duration = Duration::from_secs(2);

/// How often the discussion clock is redrawn.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// The discussion clock is highlighted after this long.
pub const OVERTIME_AFTER: Duration = Duration::from_secs(120);

/// Used whenever an automatic word draw can't produce a pair.
pub const FALLBACK_PAIR: (&str, &str) = ("cup", "glass");
