use crate::game::{Board, Cell, GameStatus, Player, WinningLine, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, Dialog, GameOver};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(4),  // Players
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_players(frame, app, chunks[1]);
    render_board(
        frame,
        app.engine().board(),
        app.engine().winning_line(),
        app.selected_column(),
        chunks[2],
    );
    render_status(frame, app, chunks[3]);
    render_controls(frame, chunks[4]);

    match app.dialog() {
        Some(Dialog::GameOver(result)) => render_game_over(frame, app, result),
        Some(Dialog::ConfirmScoreReset) => render_confirm_reset(frame),
        None => {}
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Connect Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_players(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let engine = app.engine();
    let active = engine.status() == GameStatus::Active;

    for (player, area) in [(Player::One, halves[0]), (Player::Two, halves[1])] {
        let to_move = active && engine.current_player() == player;
        let color = player_color(player);

        let (indicator, border) = if to_move {
            ("YOUR TURN", Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else {
            ("WAITING", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("Score: {}", engine.scores().get(player)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(indicator, Style::default().fg(color))),
        ];

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(
                    app.config().players.name(player).to_string(),
                    Style::default().fg(color),
                )),
        );

        frame.render_widget(panel, area);
    }
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    winning_line: Option<&WinningLine>,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers double as the keys that drop into them
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let winning = winning_line.is_some_and(|line| line.contains(row, col));
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::PlayerOne => (" ● ", Style::default().fg(player_color(Player::One))),
                Cell::PlayerTwo => (" ● ", Style::default().fg(player_color(Player::Two))),
            };
            if winning {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Transient notice if one is live, otherwise whose turn it is
fn status_line(app: &App) -> (String, Color) {
    if let Some(notice) = app.notice() {
        return (notice.to_string(), Color::Magenta);
    }

    let players = &app.config().players;
    match app.engine().status() {
        GameStatus::Active => {
            let player = app.engine().current_player();
            (format!("{}'s Turn", players.name(player)), player_color(player))
        }
        GameStatus::WonBy(player) => (
            format!("{} wins! Press 'r' to play again.", players.name(player)),
            player_color(player),
        ),
        GameStatus::Drawn => ("It's a draw! Press 'r' to play again.".to_string(), Color::White),
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = status_line(app);
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "1-7/Enter: Drop  |  ←/→: Move  |  R: Restart  |  S: Reset scores  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_game_over(frame: &mut Frame, app: &App, result: GameOver) {
    let (title, message, color) = match result {
        GameOver::Won(player) => (
            "Congratulations!",
            format!("{} wins!", app.config().players.name(player)),
            player_color(player),
        ),
        GameOver::Draw => ("Game Over!", "It's a draw!".to_string(), Color::White),
    };

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter: Play again  |  Esc: Close"),
    ];

    render_popup(frame, title, lines, 44, 7);
}

fn render_confirm_reset(frame: &mut Frame) {
    let lines = vec![
        Line::from("Are you sure you want to reset all scores?"),
        Line::from(""),
        Line::from("y: Yes  |  n: No"),
    ];

    render_popup(frame, "Reset scores", lines, 48, 7);
}

fn render_popup(frame: &mut Frame, title: &str, lines: Vec<Line>, width: u16, height: u16) {
    let area = centered_rect(width, height, frame.area());
    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
