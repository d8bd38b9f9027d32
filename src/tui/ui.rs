//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::config::{DisplayConfig, Language};
use crate::games::tictactoe::{GameSnapshot, Player, Position, Square, Tag};

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let config = app.config();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(title_text(*config.language()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], &snapshot, config, app.cursor());

    let status_style = if snapshot.has_tag(Tag::Winner) {
        Style::default()
            .fg(player_color(snapshot.winner().unwrap_or(Player::X)))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(status_text(&snapshot, config))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(*config.language()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Status line: whose turn it is, who won, or that it was a draw.
pub fn status_text(snapshot: &GameSnapshot, config: &DisplayConfig) -> String {
    let language = *config.language();
    if snapshot.has_tag(Tag::Winner) {
        let winner = snapshot.winner().map(|p| config.symbol(p)).unwrap_or("?");
        match language {
            Language::En => format!("Player {} wins!", winner),
            Language::Ja => format!("プレイヤー {} の勝利です！", winner),
        }
    } else if snapshot.has_tag(Tag::Draw) {
        match language {
            Language::En => "It's a draw!".to_string(),
            Language::Ja => "引き分けです！".to_string(),
        }
    } else {
        let current = config.symbol(*snapshot.current_player());
        match language {
            Language::En => format!("Current player: {}", current),
            Language::Ja => format!("現在のプレイヤー: {}", current),
        }
    }
}

fn title_text(language: Language) -> &'static str {
    match language {
        Language::En => "Tic-Tac-Toe",
        Language::Ja => "○×ゲーム",
    }
}

fn help_text(language: Language) -> &'static str {
    match language {
        Language::En => "arrows/hjkl move · enter/1-9 play · r reset · q quit",
        Language::Ja => "矢印/hjkl 移動 · enter/1-9 配置 · r ゲームをリセット · q 終了",
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    config: &DisplayConfig,
    cursor: Position,
) {
    let board_area = center_rect(area, 40, 11);

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

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, snapshot, config, cursor, row * 3);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    config: &DisplayConfig,
    cursor: Position,
    start: usize,
) {
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

    draw_cell(frame, cols[0], snapshot, config, cursor, start);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], snapshot, config, cursor, start + 1);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], snapshot, config, cursor, start + 2);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    config: &DisplayConfig,
    cursor: Position,
    index: usize,
) {
    let square = snapshot.board().get(index).unwrap_or_default();

    let (symbol, mut style) = match square {
        Square::Empty if *config.show_cell_numbers() => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (
            config.symbol(player).to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let in_winning_line = snapshot
        .winning_line()
        .is_some_and(|line| line.cells.contains(&index));
    if in_winning_line {
        style = style.add_modifier(Modifier::REVERSED);
    }

    if cursor.to_index() == index {
        style = if snapshot.is_cell_enabled(index) {
            style.bg(Color::White).fg(Color::Black)
        } else {
            style.bg(Color::DarkGray)
        };
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    frame.render_widget(Paragraph::new("│").style(style), area);
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
