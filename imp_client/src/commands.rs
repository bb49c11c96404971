use impostor::{GameMode, PlayerIdx};
use std::{fmt, path::PathBuf};

/// Everything a player can type into the input box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Set the player count outright.
    Players(usize),
    MorePlayers,
    FewerPlayers,
    Mode(GameMode),
    Start,
    Name(String),
    /// Attach a photo from an image file.
    Photo(PathBuf),
    ClearPhoto,
    /// Fill in one custom word (`slot` is zero-based).
    Word { slot: usize, word: String },
    /// Fill in both custom words at once.
    Words(String, String),
    Next,
    Reveal(PlayerIdx),
    Hide,
    Guess,
    Accuse(PlayerIdx),
    Confirm,
    PlayAgain,
    ChangeWords,
    NewGame,
    ToggleSound,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected a 1-based player number.
    InvalidPlayerNumber(String),
    /// A command that needs an argument was given none.
    MissingArgument(&'static str),
    /// Mode other than auto or custom.
    UnknownMode(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayerNumber(value) => write!(
                f,
                "Invalid player number '{value}'. Use the number shown next to the name (e.g., 'reveal 2')"
            ),
            Self::MissingArgument(usage) => write!(f, "Missing argument. Usage: '{usage}'"),
            Self::UnknownMode(value) => {
                write!(f, "Unknown mode '{value}'. Use 'mode auto' or 'mode custom'")
            }
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{cmd}'. Type 'help' to see available commands"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a [`GameCommand`].
///
/// Player numbers are typed 1-based and returned 0-based.
///
/// # Examples
///
/// ```
/// use imp_client::commands::{GameCommand, parse_command};
///
/// assert_eq!(parse_command("start"), Ok(GameCommand::Start));
/// assert_eq!(parse_command("reveal 2"), Ok(GameCommand::Reveal(1)));
/// assert_eq!(
///     parse_command("name Ada Lovelace"),
///     Ok(GameCommand::Name("Ada Lovelace".to_string()))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<GameCommand, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "+" | "more" => return Ok(GameCommand::MorePlayers),
        "-" | "fewer" => return Ok(GameCommand::FewerPlayers),
        "start" => return Ok(GameCommand::Start),
        "next" | "done" => return Ok(GameCommand::Next),
        "hide" => return Ok(GameCommand::Hide),
        "guess" | "vote" => return Ok(GameCommand::Guess),
        "confirm" => return Ok(GameCommand::Confirm),
        "again" => return Ok(GameCommand::PlayAgain),
        "new-words" => return Ok(GameCommand::ChangeWords),
        "new-game" => return Ok(GameCommand::NewGame),
        "sound" | "mute" => return Ok(GameCommand::ToggleSound),
        "help" => return Ok(GameCommand::Help),
        "quit" | "exit" => return Ok(GameCommand::Quit),
        _ => {}
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    match head {
        "players" => parse_count(rest),
        "mode" => parse_mode(rest),
        "name" => require(rest, "name NAME").map(|name| GameCommand::Name(name.to_string())),
        "photo" => match rest {
            "" => Err(ParseError::MissingArgument("photo PATH")),
            "clear" => Ok(GameCommand::ClearPhoto),
            path => Ok(GameCommand::Photo(PathBuf::from(path))),
        },
        "word1" => require(rest, "word1 WORD").map(|word| GameCommand::Word {
            slot: 0,
            word: word.to_string(),
        }),
        "word2" => require(rest, "word2 WORD").map(|word| GameCommand::Word {
            slot: 1,
            word: word.to_string(),
        }),
        "words" => parse_words(rest),
        "reveal" => parse_player(rest, "reveal N").map(GameCommand::Reveal),
        "accuse" | "select" => parse_player(rest, "accuse N").map(GameCommand::Accuse),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// The line to echo into the shared history for `input`. Custom words
/// are masked since everybody at the table can read the history.
///
/// # Examples
///
/// ```
/// use imp_client::commands::history_line;
///
/// assert_eq!(history_line(" words cup glass "), "words ***");
/// assert_eq!(history_line("reveal 2"), "reveal 2");
/// ```
#[must_use]
pub fn history_line(input: &str) -> String {
    let trimmed = input.trim();
    let head = trimmed
        .split_once(char::is_whitespace)
        .map_or(trimmed, |(head, _)| head);
    match head {
        "word1" | "word2" | "words" if head != trimmed => format!("{head} ***"),
        _ => trimmed.to_string(),
    }
}

fn require<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(usage))
    } else {
        Ok(rest)
    }
}

/// Parse "players N"
fn parse_count(rest: &str) -> Result<GameCommand, ParseError> {
    let value = require(rest, "players N")?;
    value
        .parse::<usize>()
        .map(GameCommand::Players)
        .map_err(|_| ParseError::InvalidPlayerNumber(value.to_string()))
}

/// Parse "mode auto|custom"
fn parse_mode(rest: &str) -> Result<GameCommand, ParseError> {
    let value = require(rest, "mode auto|custom")?;
    value
        .parse::<GameMode>()
        .map(GameCommand::Mode)
        .map_err(|_| ParseError::UnknownMode(value.to_string()))
}

/// Parse "words FIRST SECOND"
fn parse_words(rest: &str) -> Result<GameCommand, ParseError> {
    let parts: Vec<&str> = rest.split_ascii_whitespace().collect();
    match parts.as_slice() {
        [first, second] => Ok(GameCommand::Words(first.to_string(), second.to_string())),
        _ => Err(ParseError::MissingArgument("words FIRST SECOND")),
    }
}

/// Parse a 1-based player number into an index.
fn parse_player(rest: &str, usage: &'static str) -> Result<PlayerIdx, ParseError> {
    let value = require(rest, usage)?;
    match value.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(ParseError::InvalidPlayerNumber(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Single-word command tests ===

    #[test]
    fn test_parse_start() {
        assert_eq!(parse_command("start"), Ok(GameCommand::Start));
    }

    #[test]
    fn test_parse_player_count_shortcuts() {
        assert_eq!(parse_command("+"), Ok(GameCommand::MorePlayers));
        assert_eq!(parse_command("fewer"), Ok(GameCommand::FewerPlayers));
    }

    #[test]
    fn test_parse_result_choices() {
        assert_eq!(parse_command("again"), Ok(GameCommand::PlayAgain));
        assert_eq!(parse_command("new-words"), Ok(GameCommand::ChangeWords));
        assert_eq!(parse_command("new-game"), Ok(GameCommand::NewGame));
    }

    // === Whitespace handling ===

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        assert_eq!(parse_command("  hide  "), Ok(GameCommand::Hide));
    }

    // === Multi-word command tests ===

    #[test]
    fn test_parse_players() {
        assert_eq!(parse_command("players 6"), Ok(GameCommand::Players(6)));
        assert!(matches!(
            parse_command("players six"),
            Err(ParseError::InvalidPlayerNumber(_))
        ));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(
            parse_command("mode custom"),
            Ok(GameCommand::Mode(GameMode::Custom))
        );
        assert!(matches!(
            parse_command("mode party"),
            Err(ParseError::UnknownMode(_))
        ));
        assert_eq!(
            parse_command("mode"),
            Err(ParseError::MissingArgument("mode auto|custom"))
        );
    }

    #[test]
    fn test_parse_name_keeps_spaces() {
        assert_eq!(
            parse_command("name  Mary Jane "),
            Ok(GameCommand::Name("Mary Jane".to_string()))
        );
    }

    #[test]
    fn test_parse_photo() {
        assert_eq!(
            parse_command("photo /tmp/me.png"),
            Ok(GameCommand::Photo(PathBuf::from("/tmp/me.png")))
        );
        assert_eq!(parse_command("photo clear"), Ok(GameCommand::ClearPhoto));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(
            parse_command("words cup glass"),
            Ok(GameCommand::Words("cup".to_string(), "glass".to_string()))
        );
        assert_eq!(
            parse_command("word2 glass"),
            Ok(GameCommand::Word {
                slot: 1,
                word: "glass".to_string()
            })
        );
        assert!(matches!(
            parse_command("words cup"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_parse_player_numbers_are_one_based() {
        assert_eq!(parse_command("reveal 1"), Ok(GameCommand::Reveal(0)));
        assert_eq!(parse_command("accuse 10"), Ok(GameCommand::Accuse(9)));
        assert!(matches!(
            parse_command("reveal 0"),
            Err(ParseError::InvalidPlayerNumber(_))
        ));
        assert!(matches!(
            parse_command("select -1"),
            Err(ParseError::InvalidPlayerNumber(_))
        ));
    }

    // === History echo ===

    #[test]
    fn test_history_line_masks_custom_words() {
        assert_eq!(history_line("words zebra yak"), "words ***");
        assert_eq!(history_line("word1 zebra"), "word1 ***");
        assert_eq!(history_line("word2\tyak"), "word2 ***");
        assert_eq!(history_line("words"), "words");
    }

    #[test]
    fn test_history_line_keeps_other_commands() {
        assert_eq!(history_line("  name Ann "), "name Ann");
        assert_eq!(history_line("accuse 3"), "accuse 3");
    }

    // === Error cases ===

    #[test]
    fn test_parse_unrecognized_command() {
        assert!(matches!(
            parse_command("raise 100"),
            Err(ParseError::UnrecognizedCommand(_))
        ));
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(matches!(
            parse_command("   "),
            Err(ParseError::UnrecognizedCommand(_))
        ));
    }

    // === Error message tests ===

    #[test]
    fn test_error_message_invalid_player_number() {
        let msg = ParseError::InvalidPlayerNumber("abc".to_string()).to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("reveal 2"));
    }

    #[test]
    fn test_error_message_unrecognized_command() {
        let msg = ParseError::UnrecognizedCommand("xyz".to_string()).to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("help"));
    }
}
