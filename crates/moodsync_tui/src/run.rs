//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on
//! terminal input. Engine events, auth outcomes, and runtime log lines are
//! drained with `try_recv` each pass; all sends toward the engine go through
//! `try_send` so the UI thread never parks on a channel.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use moodsync_core::{ChatMessage, WellnessEvent};
use moodsync_wellness::EngineCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc as tokio_mpsc;

use crate::auth_flow::{AuthOutcome, AuthRequest};
use crate::runtime_events::{apply_auth_outcome, apply_wellness_event};
use crate::state::{LoginField, Panel, Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const IDLE_FRAME: Duration = Duration::from_millis(16);

/// Channels wiring the TUI thread to the engine and the auth task.
pub struct TuiChannels {
    pub events: tokio_mpsc::Receiver<WellnessEvent>,
    pub commands: tokio_mpsc::Sender<EngineCommand>,
    pub auth_requests: tokio_mpsc::Sender<AuthRequest>,
    pub auth_outcomes: tokio_mpsc::Receiver<AuthOutcome>,
    /// Runtime log lines for the debug traces screen (Ctrl+D).
    pub logs: Option<tokio_mpsc::Receiver<String>>,
}

/// Run the TUI: alternate screen, raw mode, event loop until quit.
///
/// `initial` is the screen the session gate chose; `seed_messages` is the
/// engine transcript at startup (the greeting).
pub fn run_tui(
    initial: Screen,
    appearance: Appearance,
    seed_messages: Vec<ChatMessage>,
    channels: TuiChannels,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::with_appearance(initial, appearance);
    state.messages = seed_messages;
    state.push_trace_line("[log] TUI started. Ctrl+D shows runtime logs.".to_string());

    let result = run_loop(&mut terminal, &mut state, channels);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut channels: TuiChannels,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(ev) = event::read() {
                if key_tx.send(ev).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        let mut progressed = false;

        // Drain runtime log lines into debug traces.
        if let Some(ref mut logs) = channels.logs {
            while let Ok(line) = logs.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
                progressed = true;
            }
        }
        // Drain engine events.
        while let Ok(event) = channels.events.try_recv() {
            apply_wellness_event(state, event);
            progressed = true;
        }
        // Drain auth outcomes.
        while let Ok(outcome) = channels.auth_outcomes.try_recv() {
            apply_auth_outcome(state, outcome);
            progressed = true;
        }

        // Clear transient status after the timeout.
        if let Some(set_at) = state.status_set_at {
            if set_at.elapsed() > STATUS_TIMEOUT {
                state.status.clear();
                state.status_set_at = None;
                state.needs_redraw = true;
            }
        }

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            progressed = true;
            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press {
                    handle_key(state, &channels, key.code, key.modifiers);
                }
            }
            if matches!(ev, Event::Resize(..)) {
                state.needs_redraw = true;
            }
        }

        if state.should_quit {
            let _ = channels.commands.try_send(EngineCommand::Shutdown);
            return Ok(());
        }
        if !progressed {
            std::thread::sleep(IDLE_FRAME);
        }
    }
}

fn handle_key(
    state: &mut TuiState,
    channels: &TuiChannels,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    // Global bindings first.
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('c') => {
                state.should_quit = true;
                return;
            }
            KeyCode::Char('d') => {
                state.toggle_traces();
                return;
            }
            KeyCode::Char('l') if state.screen == Screen::Main => {
                let _ = channels.auth_requests.try_send(AuthRequest::Logout);
                return;
            }
            _ => {}
        }
    }

    match state.screen {
        Screen::Login => handle_login_key(state, channels, code),
        Screen::Main => handle_main_key(state, channels, code),
        Screen::DebugTraces => handle_traces_key(state, code),
    }
}

fn handle_login_key(state: &mut TuiState, channels: &TuiChannels, code: KeyCode) {
    state.needs_redraw = true;
    match code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            state.login_field = match state.login_field {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
        KeyCode::Backspace => {
            match state.login_field {
                LoginField::Email => state.login_email.pop(),
                LoginField::Password => state.login_password.pop(),
            };
        }
        KeyCode::Enter => {
            if state.login_busy {
                return;
            }
            if state.login_email.is_empty() || state.login_password.is_empty() {
                state.login_message = Some("Email and password are required".to_string());
                return;
            }
            state.login_busy = true;
            state.login_message = None;
            let _ = channels.auth_requests.try_send(AuthRequest::Login {
                email: state.login_email.clone(),
                password: state.login_password.clone(),
            });
        }
        KeyCode::Char(c) => match state.login_field {
            LoginField::Email => state.login_email.push(c),
            LoginField::Password => state.login_password.push(c),
        },
        _ => {}
    }
}

fn handle_main_key(state: &mut TuiState, channels: &TuiChannels, code: KeyCode) {
    if code == KeyCode::Tab {
        state.focus = state.focus.next();
        state.needs_redraw = true;
        return;
    }

    if state.focus == Panel::Chat {
        match code {
            KeyCode::Enter => {
                let text = state.input_buffer.trim().to_string();
                if text.is_empty() || state.typing {
                    return;
                }
                state.take_input();
                let _ = channels.commands.try_send(EngineCommand::SendChat(text));
            }
            KeyCode::Backspace => state.backspace(),
            KeyCode::Left => state.cursor_left(),
            KeyCode::Right => state.cursor_right(),
            KeyCode::Char(c) => state.insert_char(c),
            _ => {}
        }
        return;
    }

    let command = match code {
        KeyCode::Char('c') => Some(if state.camera_on {
            EngineCommand::StopCamera
        } else {
            EngineCommand::StartCamera
        }),
        KeyCode::Char('d') => Some(EngineCommand::DetectMood),
        KeyCode::Char(' ') => Some(EngineCommand::TogglePlayback),
        KeyCode::Char('n') => Some(EngineCommand::NextTrack),
        KeyCode::Char('p') => Some(EngineCommand::PreviousTrack),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(EngineCommand::VolumeUp),
        KeyCode::Char('-') => Some(EngineCommand::VolumeDown),
        KeyCode::Char('b') => Some(EngineCommand::ToggleBreathing),
        KeyCode::Char('q') => {
            state.should_quit = true;
            None
        }
        _ => None,
    };
    if let Some(command) = command {
        let _ = channels.commands.try_send(command);
    }
}

fn handle_traces_key(state: &mut TuiState, code: KeyCode) {
    match code {
        KeyCode::Up => {
            state.trace_scroll = (state.trace_scroll + 1).min(state.trace_lines.len());
            state.needs_redraw = true;
        }
        KeyCode::Down => {
            state.trace_scroll = state.trace_scroll.saturating_sub(1);
            state.needs_redraw = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.toggle_traces();
        }
        _ => {}
    }
}
