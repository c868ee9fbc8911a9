//! TUI rendering with ratatui
//!
//! Board, color poll and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{Color as CodeColor, Mark};
use crate::game::{Mode, Row, Status};
use crate::i18n::{self, Label};
use crate::output::formatters::format_duration;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const PEG: &str = "●";
const HOLE: &str = "○";

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Poll
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Status and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_poll(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn peg_color(color: CodeColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Correct => Style::default().fg(Color::Green),
        Mark::WrongPosition => Style::default().fg(Color::Yellow),
        Mark::WrongColor => Style::default().fg(Color::DarkGray),
    }
}

fn board_line<'a>(index: usize, row: &Row, active: bool, selected: Option<usize>) -> Line<'a> {
    let number_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::styled(format!("{:>2} ", index + 1), number_style)];

    for (slot, color) in row.guess().slots().iter().enumerate() {
        let (text, mut style) = match color {
            Some(color) => (PEG, Style::default().fg(peg_color(*color))),
            None => (HOLE, Style::default().fg(Color::DarkGray)),
        };
        if active && selected == Some(slot) {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(text, style));
    }

    spans.push(Span::raw("   "));
    if let Some(feedback) = row.feedback() {
        for &mark in feedback.marks() {
            spans.push(Span::styled("■", mark_style(mark)));
        }
    }

    Line::from(spans)
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = &app.game;
    let in_progress = !game.status().is_over();

    let mut lines: Vec<Line> = game
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let active = in_progress && i == game.active_row();
            board_line(i, row, active, game.selected_slot())
        })
        .collect();

    if let Some(solution) = game.solution() {
        let mut spans = vec![Span::raw("    ")];
        for &color in solution.colors() {
            spans.push(Span::styled(PEG, Style::default().fg(peg_color(color))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let (title, color) = match game.status() {
        Status::InProgress => (" Board ", Color::White),
        Status::Won => (" Solved! ", Color::Green),
        Status::Lost => (" Game over ", Color::Red),
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Status
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_status(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let language = app.language;
    let config = &app.config;

    let mut lines = vec![Line::from(vec![
        Span::raw("Mode:   "),
        Span::styled(
            config.mode.name(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", app.stats.fingerprint),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    match config.mode {
        Mode::Relax => {}
        Mode::Stopwatch => {
            lines.push(Line::from(format!(
                "Time:   {}",
                format_duration(app.game.stopwatch().elapsed_secs())
            )));
            lines.push(Line::from(format!(
                "{}: {}",
                i18n::label(Label::BestTime, language),
                app.stats
                    .best_time
                    .map_or_else(|| "-".to_string(), format_duration)
            )));
        }
        Mode::Score => {
            lines.push(Line::from(format!(
                "{}: {}",
                i18n::label(Label::Score, language),
                app.stats.score.total_score
            )));
            lines.push(Line::from(format!(
                "{}: {}",
                i18n::label(Label::GamesPlayed, language),
                app.stats.score.games_played
            )));
        }
    }

    if let Some(hint) = &app.hint {
        lines.push(Line::from(format!(
            "{} {}",
            hint.remaining,
            i18n::label(Label::Remaining, language)
        )));
        if let Some(suggestion) = hint.suggestion {
            let mut spans = vec![Span::raw(format!(
                "{}: ",
                i18n::label(Label::Suggestion, language)
            ))];
            for &color in suggestion.colors() {
                spans.push(Span::styled(PEG, Style::default().fg(peg_color(color))));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("(Tab)", Style::default().fg(Color::DarkGray)));
            lines.push(Line::from(spans));
        }
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_poll<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let ruled_out = app.hint.as_ref().map_or(&[][..], |hint| &hint.ruled_out[..]);

    let mut spans = Vec::new();
    for (i, &color) in app.game.poll().colors().iter().enumerate() {
        let key = (i + 1) % 10;
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(Color::DarkGray),
        ));
        let name = i18n::translate(color, app.language);
        if ruled_out.contains(&color) {
            spans.push(Span::styled(
                format!(" {HOLE} "),
                Style::default().fg(peg_color(color)),
            ));
            spans.push(Span::styled(
                name,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {PEG} "),
                Style::default().fg(peg_color(color)),
            ));
            spans.push(Span::raw(name));
        }
    }

    let poll = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(poll, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "1-0: Color | ←/→: Slot | Backspace: Clear | Enter: Check | Tab: Hint | m: Mode | h: Helper | n: New | q: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
