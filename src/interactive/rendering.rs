//! TUI rendering with ratatui
//!
//! Draws the letter grid, the game status and the message log.

use super::app::{App, Board, Cell, MessageStyle};
use crate::core::Verdict;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Duration;

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid
            Constraint::Percentage(40), // Info and messages
        ])
        .split(chunks[1]);

    render_grid(f, &app.board, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🇫🇷 MOT DU JOUR - Devinez le mot")
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

/// Background color for a scored cell
const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}

fn cell_span(cell: &Cell, has_cursor: bool, editable: bool) -> Span<'static> {
    let letter = cell.letter.unwrap_or(if editable { '_' } else { '·' });
    let text = format!(" {letter} ");

    let style = match cell.verdict {
        Some(verdict) => Style::default()
            .bg(verdict_color(verdict))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        None if has_cursor => Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
        None if cell.locked => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        None if editable => Style::default().fg(Color::White),
        None => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, board: &Board, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (r, row) in board.rows.iter().enumerate() {
        let editable = board.editable.get(r).copied().unwrap_or(false);
        let mut spans = Vec::with_capacity(row.len() * 2);

        for (c, cell) in row.iter().enumerate() {
            let has_cursor = editable && board.cursor == Some((r, c));
            spans.push(cell_span(cell, has_cursor, editable));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Grille ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_info_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Game info
            Constraint::Min(5),    // Legend and messages
        ])
        .split(area);

    render_game_info(f, app, chunks[0]);
    render_messages(f, &app.board, chunks[1]);
}

fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

fn render_game_info<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let board = &app.board;

    let content = vec![
        Line::from(format!("Word length: {} letters", board.word_length)),
        Line::from(vec![
            Span::raw("Attempts left: "),
            Span::styled(
                board.attempts_left.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                board.score.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Next word in: {}",
            format_countdown(app.next_word_in())
        )),
        Line::from(vec![
            Span::styled("   ", Style::default().bg(Color::Green)),
            Span::raw(" right spot  "),
            Span::styled("   ", Style::default().bg(Color::Yellow)),
            Span::raw(" elsewhere"),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Partie ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, board: &Board, area: Rect) {
    let messages: Vec<ListItem> = board
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

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = if app.is_over() {
        "Esc: Quit | Come back tomorrow for a new word"
    } else {
        "Type letters | Enter: Submit | Backspace: Erase | ←/→: Move | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
