//! Terminal UI for a pass-and-play impostor game.
//!
//! Everything runs on one thread: the loop polls the keyboard, hands due
//! timers back to the game and redraws. Players type commands into the
//! input box; the game's view decides what each phase looks like.

use anyhow::Result;
use chrono::{DateTime, Local};
use impostor::{
    FileStore, GameError, GameEvent, GameMode, GameStateManagement, GameView, ImpostorState,
    KeyValueStore, Phase, PlayerIdx, Preferences, RegistrationStep, TimerQueue,
    constants::CLOCK_TICK, functional,
};
use log::{debug, info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Style, Stylize},
    symbols::scrollbar,
    text::{Line, Span, Text},
    widgets::{
        Block, Clear, Gauge, List, ListDirection, ListItem, Padding, Paragraph, Scrollbar,
        ScrollbarOrientation, Wrap, block,
    },
};
use std::time::{Duration, Instant};

use crate::{
    camera::{CameraCapture, FileCamera},
    commands::{GameCommand, history_line, parse_command},
    config::ClientConfig,
    effects::{Effects, TerminalEffects},
};

mod widgets;

use widgets::{ScrollableList, UserInput};

const HELP: &str = "\
players <n>
        Set the number of players (3 to 10). '+' and '-' also work.
mode <auto|custom>
        Auto draws words from the built-in list. Custom pools two words
        from every player.
start
        Start registering players.
name <name>
        Name the current player.
photo <path|clear>
        Attach a photo from an image file, or remove it.
words <first> <second>
        Custom mode: the current player's two words. 'word1'/'word2' set one.
next
        Submit the current registration step.
reveal <n>
        Show player N their word. Make sure nobody else is looking!
hide
        Hide the word and pass the device on.
guess
        End the discussion and vote.
accuse <n>
        Pick player N as the suspect.
confirm
        Lock in the vote and reveal the impostor.
again | new-words | new-game
        After a round: same players again, fresh words, or back to setup.
sound
        Toggle sound effects.
quit
        Leave the game.
";
const TUTORIAL: &str = "\
How to play

1. Choose how many people are playing and a word mode, then 'start'.
2. Everyone registers in turn. In custom mode each player also adds two
   words to the shared pool.
3. Pass the device around. Each player privately reveals their word and
   hides it again. Everybody got the same word, except the impostor.
4. Talk it over. Describe your word without giving it away.
5. Vote for who you think the impostor is. Catch them and you win!

Press any key to begin.
";
const MAX_LOG_RECORDS: usize = 1024;
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Alert,
    Error,
    Game,
    You,
}

/// A timestamped history line with an importance label to help direct
/// attention.
#[derive(Clone, Debug)]
pub struct Record {
    datetime: DateTime<Local>,
    pub kind: RecordKind,
    pub content: String,
}

impl Record {
    fn new(kind: RecordKind, content: String) -> Self {
        Self {
            datetime: Local::now(),
            kind,
            content,
        }
    }
}

impl From<Record> for ListItem<'_> {
    fn from(val: Record) -> Self {
        let repr = match val.kind {
            RecordKind::Alert => "ALERT".light_magenta(),
            RecordKind::Error => "ERROR".light_red(),
            RecordKind::Game => "GAME".light_yellow(),
            RecordKind::You => "YOU".light_green(),
        };

        let msg = vec![
            format!("[{} ", val.datetime.format("%H:%M:%S")).into(),
            Span::styled(format!("{repr:5}"), repr.style),
            format!("]: {}", val.content).into(),
        ];
        ListItem::new(Line::from(msg))
    }
}

/// A modal message that stays up until the next key press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl From<&GameError> for Dialog {
    fn from(error: &GameError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}

/// TUI App state
pub struct TuiApp<S = FileStore, E = TerminalEffects, C = FileCamera>
where
    S: KeyValueStore,
    E: Effects,
    C: CameraCapture,
{
    /// Only empty while a transition is being applied
    game: Option<ImpostorState>,
    view: GameView,
    timers: TimerQueue,
    /// When the discussion clock was last read
    clock_read_at: Instant,
    preferences: Preferences<S>,
    effects: E,
    camera: C,
    /// Whether to display the help menu window
    show_help_menu: bool,
    show_tutorial: bool,
    dialog: Option<Dialog>,
    /// Helps scroll through the help menu window if the terminal is small
    help_handle: ScrollableList,
    /// History of recorded messages
    log_handle: ScrollableList,
    records: Vec<Record>,
    /// Current value of the input box
    user_input: UserInput,
    quit: bool,
}

impl<S: KeyValueStore, E: Effects, C: CameraCapture> TuiApp<S, E, C> {
    pub fn new(config: &ClientConfig, preferences: Preferences<S>, effects: E, camera: C) -> Self {
        // Fill help menu with help text lines
        let mut help_handle = ScrollableList::new(MAX_LOG_RECORDS);
        help_handle.push("".into());
        for line in HELP.lines() {
            help_handle.push(line.into());
        }
        help_handle.push("".into());
        help_handle.jump_to_first();

        let game = ImpostorState::from(config.game_settings());
        let view = game.get_view();
        let show_tutorial = !preferences.tutorial_seen();
        let mut app = Self {
            game: Some(game),
            view,
            timers: TimerQueue::new(),
            clock_read_at: Instant::now(),
            preferences,
            effects,
            camera,
            show_help_menu: false,
            show_tutorial,
            dialog: None,
            help_handle,
            log_handle: ScrollableList::new(MAX_LOG_RECORDS),
            records: Vec::new(),
            user_input: UserInput::new(),
            quit: false,
        };
        app.add_log(
            RecordKind::Alert,
            "Type 'help' or press Tab for the list of commands".to_string(),
        );
        app
    }

    #[must_use]
    pub const fn view(&self) -> &GameView {
        &self.view
    }

    #[must_use]
    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub const fn is_showing_tutorial(&self) -> bool {
        self.show_tutorial
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn effects(&self) -> &E {
        &self.effects
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Add log message
    fn add_log(&mut self, kind: RecordKind, content: String) {
        let record = Record::new(kind, content);
        self.records.push(record.clone());
        if self.records.len() > MAX_LOG_RECORDS {
            self.records.remove(0);
        }
        self.log_handle.push(record.into());
    }

    fn show_error(&mut self, error: &GameError) {
        self.add_log(RecordKind::Error, error.to_string());
        self.dialog = Some(Dialog::from(error));
    }

    /// Close the tutorial and remember that it was seen.
    pub fn dismiss_tutorial(&mut self) {
        if !self.show_tutorial {
            return;
        }
        self.show_tutorial = false;
        if let Err(error) = self.preferences.mark_tutorial_seen() {
            warn!("couldn't save preferences: {error}");
            self.add_log(RecordKind::Error, error.to_string());
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Handle a line typed into the input box.
    pub fn handle_input(&mut self, user_input: &str) {
        if user_input.trim().is_empty() {
            return;
        }
        self.add_log(RecordKind::You, history_line(user_input));
        match parse_command(user_input) {
            Ok(command) => self.handle_command(command, Instant::now()),
            Err(error) => self.add_log(RecordKind::Error, error.to_string()),
        }
    }

    /// Apply a parsed command at `now`, then let the game move on.
    pub fn handle_command(&mut self, command: GameCommand, now: Instant) {
        if let Err(error) = self.apply(command, now) {
            self.show_error(&error);
        }
        self.refresh();
    }

    fn apply(&mut self, command: GameCommand, now: Instant) -> Result<(), GameError> {
        let Some(game) = self.game.as_mut() else {
            return Ok(());
        };
        match command {
            GameCommand::Players(player_count) => game.set_player_count(player_count),
            GameCommand::MorePlayers => {
                if !game.increase_players()? {
                    self.add_log(RecordKind::Alert, "That's the most players".to_string());
                }
                Ok(())
            }
            GameCommand::FewerPlayers => {
                if !game.decrease_players()? {
                    self.add_log(RecordKind::Alert, "That's the fewest players".to_string());
                }
                Ok(())
            }
            GameCommand::Mode(mode) => game.select_mode(mode),
            GameCommand::Start => game.start_game(),
            GameCommand::Name(name) => game.set_name(&name),
            GameCommand::Photo(path) => {
                let avatar = self.camera.capture(&path)?;
                game.set_avatar(Some(avatar))
            }
            GameCommand::ClearPhoto => game.set_avatar(None),
            GameCommand::Word { slot, word } => game.set_word(slot, &word),
            GameCommand::Words(first, second) => {
                game.set_word(0, &first)?;
                game.set_word(1, &second)
            }
            GameCommand::Next => game.advance(),
            GameCommand::Reveal(idx) => game.reveal_word(idx).map(|_| ()),
            GameCommand::Hide => {
                let deferred = game.hide_word()?;
                self.timers.schedule(now, deferred);
                Ok(())
            }
            GameCommand::Guess => game.start_guess(),
            GameCommand::Accuse(idx) => game.select_impostor(idx),
            GameCommand::Confirm => game.confirm_guess(),
            GameCommand::PlayAgain => game.play_again(),
            GameCommand::ChangeWords => game.change_words(),
            GameCommand::NewGame => game.new_game(),
            GameCommand::ToggleSound => {
                let muted = !self.effects.is_muted();
                self.effects.set_muted(muted);
                let state = if muted { "off" } else { "on" };
                self.add_log(RecordKind::Alert, format!("Sound {state}"));
                Ok(())
            }
            GameCommand::Help => {
                self.show_help_menu = !self.show_help_menu;
                Ok(())
            }
            GameCommand::Quit => {
                self.quit = true;
                Ok(())
            }
        }
    }

    /// Fire every timer that's due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let due = self.timers.pop_due(now);
        if due.is_empty() {
            if self.view.phase == Phase::Discussion
                && now.saturating_duration_since(self.clock_read_at) >= CLOCK_TICK
            {
                self.clock_read_at = now;
                if let Some(game) = &self.game {
                    self.view = game.get_view();
                }
            }
            return;
        }
        if let Some(game) = self.game.as_mut() {
            for deferred in due {
                game.fire(deferred);
            }
        }
        self.refresh();
    }

    /// Step the game, drop timers from earlier phases and report events.
    fn refresh(&mut self) {
        let Some(state) = self.game.take() else {
            return;
        };
        let mut game = state.step();
        self.timers.prune(game.data().epoch());

        for event in game.drain_events() {
            if let Some(cue) = event.cue() {
                self.effects.play(cue);
            }
            if let GameEvent::RoundOver(outcome) = event {
                self.effects.celebrate(outcome);
            }
            self.add_log(RecordKind::Game, event.to_string());
        }
        self.view = game.get_view();
        self.game = Some(game);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.show_tutorial {
            self.dismiss_tutorial();
            return;
        }
        if self.dialog.is_some() {
            self.dismiss_dialog();
            return;
        }
        match modifiers {
            KeyModifiers::CONTROL => match code {
                KeyCode::Home => self.log_handle.jump_to_first(),
                KeyCode::End => self.log_handle.jump_to_last(),
                KeyCode::Char('c') => self.quit = true,
                _ => {}
            },
            KeyModifiers::NONE | KeyModifiers::SHIFT => match code {
                KeyCode::Enter => {
                    let user_input = self.user_input.submit();
                    self.handle_input(&user_input);
                }
                KeyCode::Char(to_insert) => self.user_input.input(to_insert),
                KeyCode::Backspace => self.user_input.backspace(),
                KeyCode::Delete => self.user_input.delete(),
                KeyCode::Left => self.user_input.move_left(),
                KeyCode::Right => self.user_input.move_right(),
                KeyCode::Up => {
                    if self.show_help_menu {
                        self.help_handle.move_up();
                    } else {
                        self.log_handle.move_up();
                    }
                }
                KeyCode::Down => {
                    if self.show_help_menu {
                        self.help_handle.move_down();
                    } else {
                        self.log_handle.move_down();
                    }
                }
                KeyCode::Home => self.user_input.jump_to_first(),
                KeyCode::End => self.user_input.jump_to_last(),
                KeyCode::Tab => self.show_help_menu = !self.show_help_menu,
                KeyCode::Esc => self.quit = true,
                _ => {}
            },
            _ => {}
        }
    }

    /// Render the phase title and, while discussing, the clock
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            " impostor ".bold().light_yellow(),
            format!(" {} ", self.view.phase).into(),
        ];
        if let Some(elapsed) = self.view.discussion_elapsed {
            let clock = functional::format_elapsed(elapsed);
            if self.view.phase == Phase::Discussion && functional::is_overtime(elapsed) {
                spans.push(format!(" {clock} ").bold().light_red());
            } else {
                spans.push(format!(" {clock} ").bold());
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_setup(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.view.mode {
            Some(GameMode::Auto) => "auto (words from the built-in list)".light_green(),
            Some(GameMode::Custom) => "custom (every player adds two words)".light_green(),
            None => "not selected".light_red(),
        };
        let lines = vec![
            Line::from(vec![
                "Players: ".into(),
                self.view.player_count.to_string().bold(),
                "   ('+' / '-' or 'players N')".dark_gray(),
            ]),
            Line::from(vec!["Mode:    ".into(), mode]),
            Line::default(),
            Line::from("Choose a mode with 'mode auto' or 'mode custom', then type 'start'."),
        ];
        let setup = Paragraph::new(lines).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" new game  "),
        );
        frame.render_widget(setup, area);
    }

    fn draw_registration(&self, frame: &mut Frame, area: Rect) {
        let Some(registration) = &self.view.registration else {
            return;
        };
        let [gauge_area, form_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).areas(area);

        let gauge = Gauge::default()
            .block(Block::bordered().title(" registration  "))
            .gauge_style(Style::default().light_green())
            .ratio(registration.progress.clamp(0.0, 1.0))
            .label(registration.label.clone());
        frame.render_widget(gauge, gauge_area);

        let player = self.view.players.get(registration.index);
        let photo = player
            .and_then(|player| player.avatar.as_ref())
            .map_or_else(|| "none".dark_gray(), |avatar| avatar.to_string().into());
        let mut lines = vec![
            Line::from(vec!["Name:  ".into(), registration.name.clone().bold()]),
            Line::from(vec!["Photo: ".into(), photo]),
        ];
        if registration.step == RegistrationStep::Words {
            let (first, second) = registration
                .words
                .as_ref()
                .map_or((String::new(), String::new()), |[first, second]| {
                    (first.clone(), second.clone())
                });
            lines.push(Line::from(vec!["Word 1: ".into(), first.bold()]));
            lines.push(Line::from(vec!["Word 2: ".into(), second.bold()]));
        }
        lines.push(Line::default());
        let submit = if registration.is_last {
            "start revealing"
        } else {
            "continue"
        };
        let hint = match registration.step {
            RegistrationStep::Name => "Type 'name NAME' (and optionally 'photo PATH')",
            RegistrationStep::Words => "Type 'words FIRST SECOND'",
        };
        lines.push(Line::from(hint));
        if registration.can_submit {
            lines.push(Line::from(vec![
                "Type 'next' to ".into(),
                submit.bold().light_green(),
            ]));
        }
        let form = Paragraph::new(lines).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(format!(" player {}  ", registration.index + 1)),
        );
        frame.render_widget(form, form_area);
    }

    /// The status line of a player card for the current phase
    fn player_status(&self, idx: PlayerIdx) -> Line<'static> {
        let Some(player) = self.view.players.get(idx) else {
            return Line::default();
        };
        match self.view.phase {
            Phase::WordReveal if self.view.passing == Some(idx) => "passing...".light_blue().into(),
            Phase::WordReveal if player.revealed => "✓ seen".light_green().into(),
            Phase::WordReveal => format!("reveal {}", idx + 1).dark_gray().into(),
            Phase::Guess if self.view.selected == Some(idx) => "suspect".bold().light_red().into(),
            Phase::Guess => format!("accuse {}", idx + 1).dark_gray().into(),
            Phase::Result => match (player.is_impostor, &player.word) {
                (Some(true), Some(word)) => format!("IMPOSTOR ({})", word.to_uppercase())
                    .bold()
                    .light_red()
                    .into(),
                (Some(true), None) => "IMPOSTOR".bold().light_red().into(),
                _ if self.view.selected == Some(idx) => "accused".light_magenta().into(),
                _ => "civilian".light_green().into(),
            },
            _ => Line::default(),
        }
    }

    /// Render the players as a grid of cards sized by table density
    fn draw_player_grid(&self, frame: &mut Frame, area: Rect) {
        let columns = self.view.density.columns();
        let rows = self.view.players.len().div_ceil(columns).max(1);
        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let cell_areas =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(*row_area);
            for (col_idx, cell_area) in cell_areas.iter().enumerate() {
                let idx = row_idx * columns + col_idx;
                let Some(player) = self.view.players.get(idx) else {
                    continue;
                };
                let photo = if player.avatar.is_some() { " 📷" } else { "" };
                let mut card =
                    Block::bordered().title(format!(" {}. {}{photo} ", idx + 1, player.name));
                if self.view.selected == Some(idx) {
                    card = card.border_style(Style::default().light_red());
                }
                let status = Paragraph::new(self.player_status(idx))
                    .alignment(Alignment::Center)
                    .block(card);
                frame.render_widget(status, *cell_area);
            }
        }
    }

    fn draw_result_banner(&self, frame: &mut Frame, area: Rect) {
        let Some(outcome) = self.view.outcome else {
            return;
        };
        let headline = if outcome.civilians_won() {
            outcome.headline().bold().light_green()
        } else {
            outcome.headline().bold().light_red()
        };
        let mut lines = vec![Line::from(headline), Line::from(outcome.message())];
        if let Some(words) = &self.view.words {
            lines.push(Line::from(words.to_string()));
        }
        lines.push(Line::from("'again', 'new-words' or 'new-game'".dark_gray()));
        let banner = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(banner, area);
    }

    fn draw_game(&self, frame: &mut Frame, area: Rect) {
        match self.view.phase {
            Phase::Setup => self.draw_setup(frame, area),
            Phase::Registration => self.draw_registration(frame, area),
            Phase::WordReveal | Phase::Guess => self.draw_player_grid(frame, area),
            Phase::Discussion => {
                let [hint_area, grid_area] =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);
                let hint = Paragraph::new("Discuss! Type 'guess' when you're ready to vote.")
                    .alignment(Alignment::Center)
                    .block(Block::bordered());
                frame.render_widget(hint, hint_area);
                self.draw_player_grid(frame, grid_area);
            }
            Phase::Result => {
                let [banner_area, grid_area] =
                    Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(area);
                self.draw_result_banner(frame, banner_area);
                self.draw_player_grid(frame, grid_area);
            }
        }
    }

    /// Render a centered box over everything else
    fn draw_popup(frame: &mut Frame, title: &str, text: Text<'_>, width: u16, height: u16) {
        let vertical = Layout::vertical([Constraint::Max(height)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(width)]).flex(Flex::Center);
        let [popup_area] = vertical.areas(frame.area());
        let [popup_area] = horizontal.areas(popup_area);
        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .padding(Padding::uniform(1))
                    .title(format!(" {title}  ")),
            );
        frame.render_widget(popup, popup_area);
    }

    fn draw_reveal(&self, frame: &mut Frame) {
        if let Some(revealing) = &self.view.revealing {
            let name = self
                .view
                .players
                .get(revealing.player)
                .map_or_else(String::new, |player| player.name.clone());
            let text = Text::from(vec![
                Line::from(format!("{name}, your word is")),
                Line::default(),
                Line::from(revealing.word.to_uppercase().bold().light_yellow()),
                Line::default(),
                Line::from("Type 'hide' when you're done".dark_gray()),
            ]);
            Self::draw_popup(frame, "secret word", text, 48, 11);
        } else if let Some(idx) = self.view.passing {
            let name = self
                .view
                .players
                .get(idx)
                .map_or_else(String::new, |player| player.name.clone());
            let text = Text::from(vec![
                Line::from(format!("{name}, pass the device")),
                Line::from("to the next player"),
            ]);
            Self::draw_popup(frame, "pass it on", text, 48, 6);
        }
    }

    /// Render the log/history window with scrollbar
    fn draw_log(&mut self, frame: &mut Frame, area: Rect) {
        let log_records = self.log_handle.list_items.clone();
        let log_records = List::new(log_records)
            .direction(ListDirection::BottomToTop)
            .block(block::Block::bordered().title(" history  "));
        frame.render_stateful_widget(log_records, area, &mut self.log_handle.list_state);

        // Render log window scrollbar
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.log_handle.scroll_state,
        );
    }

    /// Render the user input area
    fn draw_user_input(&self, frame: &mut Frame, area: Rect) {
        let user_input = Paragraph::new(self.user_input.value.as_str())
            .style(Style::default())
            .block(block::Block::bordered().title(format!(" {}  ", self.view.phase).light_green()));
        frame.render_widget(user_input, area);
        frame.set_cursor_position(Position::new(
            area.x + self.user_input.char_idx as u16 + 1,
            area.y + 1,
        ));
    }

    /// Render the help/status bar at the bottom
    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let sound = if self.effects.is_muted() {
            "♪ off".dark_gray()
        } else {
            "♪ on".green()
        };
        let help_message = vec![
            sound,
            " | press ".into(),
            "Tab".bold().white(),
            " to view help, press ".into(),
            "Enter".bold().white(),
            " to record a command, or press ".into(),
            "Esc".bold().white(),
            " to exit".into(),
        ];
        frame.render_widget(Paragraph::new(Line::from(help_message)), area);
    }

    /// Render the help menu overlay
    fn draw_help_menu(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Max(29)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(80)]).flex(Flex::Center);
        let [help_menu_area] = vertical.areas(frame.area());
        let [help_menu_area] = horizontal.areas(help_menu_area);
        frame.render_widget(Clear, help_menu_area);

        let help_items = self.help_handle.list_items.clone();
        let help_items = List::new(help_items)
            .direction(ListDirection::BottomToTop)
            .block(block::Block::bordered().title(" commands  "));
        frame.render_stateful_widget(
            help_items,
            help_menu_area,
            &mut self.help_handle.list_state,
        );

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            help_menu_area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.help_handle.scroll_state,
        );
    }

    /// Main draw function - orchestrates rendering of all UI components
    fn draw(&mut self, frame: &mut Frame) {
        let window = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(6),    // Game + log
            Constraint::Length(3), // User input area
            Constraint::Length(1), // Help bar
        ]);
        let [header_area, top_area, user_input_area, help_area] = window.areas(frame.area());
        let [game_area, log_area] =
            Layout::vertical([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(top_area);

        self.draw_header(frame, header_area);
        self.draw_game(frame, game_area);
        self.draw_log(frame, log_area);
        self.draw_user_input(frame, user_input_area);
        self.draw_help_bar(frame, help_area);
        self.draw_reveal(frame);

        if self.show_help_menu {
            self.draw_help_menu(frame);
        }
        if let Some(dialog) = &self.dialog {
            let text = Text::from(vec![
                Line::from(dialog.message.clone()),
                Line::default(),
                Line::from("Press any key".dark_gray()),
            ]);
            Self::draw_popup(frame, &dialog.title, text, 60, 9);
        }
        if self.show_tutorial {
            let height = u16::try_from(TUTORIAL.lines().count() + 4).unwrap_or(u16::MAX);
            Self::draw_popup(frame, "welcome", Text::from(TUTORIAL), 80, height);
        }
    }

    /// Run the TUI application
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!("terminal client started");
        while !self.quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) = event::read()?
                {
                    self.handle_key(code, modifiers);
                }
            }

            self.tick(Instant::now());
        }
        debug!("terminal client exiting");
        Ok(())
    }
}
