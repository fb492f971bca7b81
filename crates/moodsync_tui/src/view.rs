//! Render [TuiState] — login form, main panels, debug traces.

use chrono::Local;
use moodsync_core::{catalog, Sender};
use moodsync_wellness::{format_time, BreathPhase};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::state::{LoginField, Panel, Screen, TuiState};
use crate::theme::color;

pub fn draw(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    f.render_widget(
        Block::default().style(Style::default().bg(color(palette.background))),
        area,
    );
    match state.screen {
        Screen::Login => draw_login(f, state, area),
        Screen::Main => draw_main(f, state, area),
        Screen::DebugTraces => draw_traces(f, state, area),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn draw_login(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let rect = centered_rect(52, 14, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.border_focused)))
        .title(format!(" {} — Login ", moodsync_constant::app::DISPLAY_NAME));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let field_style = |field: LoginField| {
        if state.login_field == field {
            Style::default().fg(color(palette.accent))
        } else {
            Style::default().fg(color(palette.text_muted))
        }
    };
    let masked: String = "•".repeat(state.login_password.chars().count());

    let mut lines = vec![
        Line::from(Span::styled(
            moodsync_constant::app::TAGLINE,
            Style::default().fg(color(palette.text_muted)),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Email    ", field_style(LoginField::Email)),
            Span::styled(
                if state.login_email.is_empty() {
                    "you@example.com"
                } else {
                    state.login_email.as_str()
                },
                if state.login_email.is_empty() {
                    Style::default().fg(color(palette.text_placeholder))
                } else {
                    Style::default().fg(color(palette.text))
                },
            ),
        ]),
        Line::from(vec![
            Span::styled("Password ", field_style(LoginField::Password)),
            Span::styled(masked, Style::default().fg(color(palette.text))),
        ]),
        Line::default(),
    ];
    if state.login_busy {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(color(palette.text_muted)),
        )));
    } else if let Some(message) = &state.login_message {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(color(palette.danger)),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter submit · Tab switch field · Ctrl+C quit",
        Style::default().fg(color(palette.text_placeholder)),
    )));
    lines.push(Line::from(Span::styled(
        "No account? Run `moodsync register` first.",
        Style::default().fg(color(palette.text_placeholder)),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_main(f: &mut Frame, state: &TuiState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, state, rows[0]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    draw_mood_panel(f, state, top[0]);
    draw_music_panel(f, state, top[1]);
    draw_meditation_panel(f, state, bottom[0]);
    draw_chat_panel(f, state, bottom[1]);

    draw_status_bar(f, state, rows[2]);
}

fn panel_block(state: &TuiState, panel: Panel) -> Block<'static> {
    let palette = &state.palette;
    let border = if state.focus == panel {
        color(palette.border_focused)
    } else {
        color(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", panel.title()))
        .style(Style::default().bg(color(palette.surface_background)))
}

fn draw_header(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let (from, to) = palette.mood_gradient(state.mood);
    let badge = match state.mood {
        Some(mood) => format!(" Current mood: {mood} "),
        None => " No mood detected yet ".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", moodsync_constant::app::DISPLAY_NAME),
            Style::default()
                .fg(color(palette.text))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            moodsync_constant::app::DESCRIPTION,
            Style::default().fg(color(palette.text_muted)),
        ),
        Span::raw("  "),
        Span::styled(badge, Style::default().fg(color(from)).bg(color(to)).add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(color(palette.border)));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_mood_panel(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let block = panel_block(state, Panel::Mood);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let camera_line = if state.camera_on {
        Line::from(Span::styled(
            "● Camera active",
            Style::default().fg(color(palette.success)),
        ))
    } else {
        Line::from(Span::styled(
            "○ Camera not active",
            Style::default().fg(color(palette.text_muted)),
        ))
    };
    let detect_line = if state.analyzing {
        Line::from(Span::styled(
            "Analyzing...",
            Style::default().fg(color(palette.warning)),
        ))
    } else {
        match state.mood {
            Some(mood) => Line::from(vec![
                Span::styled("Detected: ", Style::default().fg(color(palette.text_muted))),
                Span::styled(
                    mood.as_str(),
                    Style::default()
                        .fg(color(palette.mood_gradient(state.mood).0))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled(
                "Let us capture your current emotional state",
                Style::default().fg(color(palette.text_muted)),
            )),
        }
    };
    let lines = vec![
        camera_line,
        Line::default(),
        detect_line,
        Line::default(),
        Line::from(Span::styled(
            "c camera on/off · d detect mood",
            Style::default().fg(color(palette.text_placeholder)),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_music_panel(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let block = panel_block(state, Panel::Music);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(track) = state.current_track() else {
        f.render_widget(
            Paragraph::new("No tracks for this mood")
                .style(Style::default().fg(color(palette.text_muted))),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let subtitle = match state.mood {
        Some(mood) => format!("Playing {mood} music"),
        None => "Select a mood to play curated music".to_string(),
    };
    let head = vec![
        Line::from(vec![
            Span::styled(
                track.title,
                Style::default()
                    .fg(color(palette.text))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", track.artist),
                Style::default().fg(color(palette.text_muted)),
            ),
        ]),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(color(palette.text_muted)),
        )),
    ];
    f.render_widget(Paragraph::new(head), rows[0]);

    let ratio = if track.duration_secs == 0 {
        0.0
    } else {
        f64::from(state.position_secs.min(track.duration_secs)) / f64::from(track.duration_secs)
    };
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(format!(
            "{} / {}",
            format_time(state.position_secs),
            format_time(track.duration_secs)
        ))
        .gauge_style(Style::default().fg(color(palette.mood_gradient(state.mood).0)));
    f.render_widget(gauge, rows[1]);

    let controls = Line::from(Span::styled(
        format!(
            "{}  space play/pause · n/p skip · +/- volume {}%",
            if state.playing { "▶" } else { "⏸" },
            state.volume
        ),
        Style::default().fg(color(palette.text_placeholder)),
    ));
    f.render_widget(Paragraph::new(controls), rows[2]);

    // Up next: remainder of the playlist after the active track.
    let playlist = state.playlist();
    if playlist.len() > 1 {
        let mut lines = vec![Line::from(Span::styled(
            "Up Next",
            Style::default().fg(color(palette.text_muted)),
        ))];
        for track in playlist.iter().skip(state.track_index + 1).take(3) {
            lines.push(Line::from(Span::styled(
                format!(
                    "  {} — {} ({})",
                    track.title,
                    track.artist,
                    format_time(track.duration_secs)
                ),
                Style::default().fg(color(palette.text)),
            )));
        }
        f.render_widget(Paragraph::new(lines), rows[3]);
    }
}

fn draw_meditation_panel(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let block = panel_block(state, Panel::Meditation);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let tips = catalog::tips_for(state.mood);
    let tip = tips[0];
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                tip.title,
                Style::default()
                    .fg(color(palette.mood_gradient(state.mood).0))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", tip.duration),
                Style::default().fg(color(palette.text_muted)),
            ),
        ]),
        Line::from(Span::styled(
            tip.description,
            Style::default().fg(color(palette.text_muted)),
        )),
        Line::from(Span::styled(
            tip.instruction,
            Style::default().fg(color(palette.text)),
        )),
        Line::default(),
    ];
    if state.breathing {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} breaths  ", state.breath_count),
                Style::default()
                    .fg(color(palette.accent))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                breath_phase(state.breath_count).label(),
                Style::default().fg(color(palette.text)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "b stop exercise",
            Style::default().fg(color(palette.text_placeholder)),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "b start breathing exercise",
            Style::default().fg(color(palette.text_placeholder)),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn breath_phase(count: u32) -> BreathPhase {
    if count % 2 == 0 {
        BreathPhase::Inhale
    } else {
        BreathPhase::Exhale
    }
}

fn draw_chat_panel(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let block = panel_block(state, Panel::Chat);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for message in &state.messages {
        let (label, label_color) = match message.sender {
            Sender::User => ("You", palette.accent),
            Sender::Bot => ("Bot", palette.success),
        };
        let stamp = message
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label} "),
                Style::default()
                    .fg(color(label_color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stamp, Style::default().fg(color(palette.text_placeholder))),
        ]));
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(color(palette.text)),
        )));
    }
    if state.messages.len() <= 1 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Try asking:",
            Style::default().fg(color(palette.text_muted)),
        )));
        for prompt in moodsync_core::transcript::SUGGESTED_PROMPTS {
            lines.push(Line::from(Span::styled(
                format!("  · {prompt}"),
                Style::default().fg(color(palette.text_placeholder)),
            )));
        }
    }
    if state.typing {
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            Style::default().fg(color(palette.text_muted)),
        )));
    }
    // Keep the tail visible.
    let visible = rows[0].height as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);

    let prompt = "> ";
    let input_line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(color(palette.accent))),
        Span::styled(
            state.input_buffer.clone(),
            Style::default().fg(color(palette.text)),
        ),
    ]);
    f.render_widget(Paragraph::new(input_line), rows[1]);
    if state.focus == Panel::Chat {
        let prefix: String = state
            .input_buffer
            .chars()
            .take(state.input_cursor)
            .collect();
        let x = rows[1].x + prompt.width() as u16 + prefix.width() as u16;
        f.set_cursor_position((x.min(rows[1].right().saturating_sub(1)), rows[1].y));
    }
}

fn draw_status_bar(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let keys = "Tab focus · Ctrl+L logout · Ctrl+D traces · Ctrl+C quit";
    let pad = (area.width as usize)
        .saturating_sub(state.status.width() + keys.width() + 2);
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", state.status),
            Style::default().fg(color(palette.text)),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(keys, Style::default().fg(color(palette.text_placeholder))),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(color(palette.status_bar_background))),
        area,
    );
}

fn draw_traces(f: &mut Frame, state: &TuiState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.border)))
        .title(" Debug Traces (Ctrl+D to close) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = inner.height as usize;
    let end = state
        .trace_lines
        .len()
        .saturating_sub(state.trace_scroll);
    let start = end.saturating_sub(visible);
    let lines: Vec<Line> = state.trace_lines[start..end]
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(color(palette.text_muted)))))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}
