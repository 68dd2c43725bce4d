//! Stateless UI rendering.

use super::app::App;
use crate::game::{Cell, Seat};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title, the board with cursor highlight, and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("ninecell")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let snapshot = app.session().board().snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, &snapshot, [0, 1, 2]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, &snapshot, [3, 4, 5]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, &snapshot, [6, 7, 8]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, snapshot: &[Cell; 9], indices: [usize; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, snapshot[indices[0]]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, snapshot[indices[1]]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, snapshot[indices[2]]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let (symbol, base_style) = match cell.mark() {
        None => (
            format!(" {} ", cell.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(mark) => {
            let color = if mark == app.session().player(Seat::First).mark() {
                Color::Blue
            } else {
                Color::Red
            };
            (
                format!(" {} ", mark),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if cell.index() == app.cursor() && !app.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
