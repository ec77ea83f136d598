use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::CellCanvas;
use crate::metrics::SessionMetrics;

/// Lays out the stats header, the board and the controls footer
pub struct Hud;

impl Hud {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &CellCanvas,
        snake_length: usize,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snake_length, metrics);
        frame.render_widget(stats, chunks[0]);

        let board = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let board_area = centered(chunks[1], canvas);
        let inner = board.inner(board_area);
        frame.render_widget(board, board_area);
        frame.render_widget(canvas, inner);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_stats(&self, snake_length: usize, metrics: &SessionMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snake_length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Eaten: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.food_eaten.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.rounds.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// Board rectangle (canvas plus border) centered in `area`, shrunk to fit
fn centered(area: Rect, canvas: &CellCanvas) -> Rect {
    let (columns, rows) = canvas.terminal_size();
    let width = (columns + 2).min(area.width);
    let height = (rows + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
