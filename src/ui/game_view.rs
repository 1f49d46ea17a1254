use crate::config::UiConfig;
use crate::game::{GameEngine, GameOutcome, MoveError, Player, COLS, ROWS, WIN_LENGTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one column in terminal cells
const CELL_WIDTH: usize = 9;
const IDLE_HEADER: Color = Color::Rgb(0x0D, 0x47, 0xA1);

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    ui: &UiConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(ROWS as u16 * 2 + 4), // Board
            Constraint::Length(3),                // Message
            Constraint::Length(4),                // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, ui, chunks[0]);
    render_board(frame, engine, selected_column, ui, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Status line text and the player whose color it takes.
/// `None` means neutral (a tie).
pub fn status_text(engine: &GameEngine) -> (String, Option<Player>) {
    match engine.winner() {
        Some(GameOutcome::Winner(player)) => {
            (outcome_text(GameOutcome::Winner(player)), Some(player))
        }
        Some(GameOutcome::Tie) => (outcome_text(GameOutcome::Tie), None),
        None => {
            let player = engine.current_player();
            (format!("{}'s Turn", player.name()), Some(player))
        }
    }
}

pub fn outcome_text(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
        GameOutcome::Tie => "It's a Tie!".to_string(),
    }
}

/// User-facing feedback for a rejected drop. Columns are shown 1-based.
pub fn rejection_text(err: &MoveError) -> String {
    match err {
        MoveError::InvalidColumn(col) => {
            format!("Column {} is not on the board!", col.saturating_add(1))
        }
        MoveError::ColumnFull(col) => format!("Column {} is full!", col + 1),
        MoveError::GameOver => "Game over! Press 'n' for a new game.".to_string(),
    }
}

/// Label of a column selector. The selected column reads "DROP n" for the
/// current player while the game is running.
pub fn column_label(engine: &GameEngine, col: usize, selected_column: usize) -> String {
    if is_highlighted(engine, col, selected_column) {
        format!("DROP {}", engine.current_player().number())
    } else {
        format!("Col {}", col + 1)
    }
}

fn is_highlighted(engine: &GameEngine, col: usize, selected_column: usize) -> bool {
    col == selected_column && !engine.is_game_over()
}

fn render_header(frame: &mut Frame, engine: &GameEngine, ui: &UiConfig, area: Rect) {
    let (status, player) = status_text(engine);
    let color = player.map_or(Color::Gray, |p| ui.player_color(p));

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    ui: &UiConfig,
    area: Rect,
) {
    let mut lines = Vec::new();
    let highlight = ui.player_color(engine.current_player());

    // Column selectors
    let mut col_line = vec![Span::raw(" ")]; // Align with "║"
    for col in 0..COLS {
        let label = format!(
            "{:^width$}",
            column_label(engine, col, selected_column),
            width = CELL_WIDTH
        );
        let background = if is_highlighted(engine, col, selected_column) {
            highlight
        } else {
            IDLE_HEADER
        };
        col_line.push(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        ));
    }
    col_line.push(Span::raw(" "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * CELL_WIDTH);
    lines.push(Line::from(format!("╔{rule}╗")));

    for cells in engine.snapshot() {
        let mut row_spans = vec![Span::raw("║")];
        for cell in cells {
            let (symbol, color) = match Player::from_cell(cell) {
                Some(player) => ("●", ui.player_color(player)),
                None => ("·", Color::DarkGray),
            };
            row_spans.push(Span::styled(
                format!("{:^width$}", symbol, width = CELL_WIDTH),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
        // Spacer row keeps cells roughly square
        lines.push(Line::from(format!("║{}║", " ".repeat(COLS * CELL_WIDTH))));
    }
    lines.pop();

    lines.push(Line::from(format!("╚{rule}╝")));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from(format!("←/→ Select | Enter/1-{COLS} Drop | N New Game | Q Quit"));
    let line2 = Line::from(Span::styled(
        format!("Board: {ROWS}x{COLS} • Win: {WIN_LENGTH} in a row"),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ));

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn engine_after(columns: &[isize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &col in columns {
            assert!(engine.drop_token(col));
        }
        engine
    }

    #[test]
    fn test_status_text() {
        let engine = GameEngine::new();
        assert_eq!(
            status_text(&engine),
            ("Player 1's Turn".to_string(), Some(Player::One))
        );

        let engine = engine_after(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(
            status_text(&engine),
            ("Player 1 wins!".to_string(), Some(Player::One))
        );

        let engine = engine_after(&[0, 1, 0, 1, 1, 0, 1, 0, 2, 3, 2, 3, 3, 2, 3, 2]);
        assert_eq!(status_text(&engine), ("It's a Tie!".to_string(), None));
    }

    #[test]
    fn test_column_labels() {
        let engine = engine_after(&[2]);
        assert_eq!(column_label(&engine, 1, 1), "DROP 2");
        assert_eq!(column_label(&engine, 0, 1), "Col 1");

        // No highlight once the game is over
        let engine = engine_after(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(column_label(&engine, 1, 1), "Col 2");
    }

    #[test]
    fn test_rejection_text() {
        assert_eq!(
            rejection_text(&MoveError::InvalidColumn(-1)),
            "Column 0 is not on the board!"
        );
        assert_eq!(
            rejection_text(&MoveError::InvalidColumn(isize::MAX)),
            format!("Column {} is not on the board!", isize::MAX)
        );
        assert_eq!(rejection_text(&MoveError::ColumnFull(3)), "Column 4 is full!");
    }

    #[test]
    fn test_render_shows_status_and_selector() {
        let engine = engine_after(&[0]);
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, &engine, 2, &None, &UiConfig::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Player 2's Turn"));
        assert!(text.contains("DROP 2"));
        assert!(text.contains("●"));
    }
}
