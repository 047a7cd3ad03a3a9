use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::Canvas;
use crate::game::{
    Cell, DrawError, Drawable, GameEngine, Palette, Rgb, Surface, TickEvent, TickOutcome, config,
};
use crate::metrics::GameMetrics;

const CELL_COLUMNS: u16 = config::CELL_COLUMNS as u16;

pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Paint the result of one tick onto `surface`.
    ///
    /// A collision wipes the surface first; otherwise only the vacated tail
    /// cell, the apple and the snake are touched. The tail is erased before
    /// drawing since the head or a relocated apple may now occupy it.
    pub fn draw_frame<R: rand::Rng>(
        &self,
        engine: &GameEngine<R>,
        outcome: &TickOutcome,
        surface: &mut dyn Surface,
    ) -> Result<(), DrawError> {
        match (outcome.event, outcome.vacated) {
            (TickEvent::SelfCollision, _) => surface.clear(),
            (_, Some(cell)) => surface.erase_cell(cell),
            (_, None) => {}
        }

        let objects: [&dyn Drawable; 2] = [engine.apple(), engine.snake()];
        for object in objects {
            object.draw(surface)?;
        }
        Ok(())
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        canvas: &Canvas,
        metrics: &GameMetrics,
        length: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(metrics, length);
        frame.render_widget(stats, chunks[0]);

        let board = canvas.board();
        // Boards wider than the terminal are clipped by `centered`
        let game_area = centered(
            chunks[1],
            bordered(board.width, CELL_COLUMNS),
            bordered(board.height, 1),
        );
        frame.render_widget(self.render_board(canvas), game_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, canvas: &Canvas) -> Paragraph<'_> {
        let board = canvas.board();
        let border = to_color(self.palette.border);
        let background = to_color(self.palette.background);
        let mut lines = Vec::with_capacity(board.height as usize);

        for y in 0..board.height as i32 {
            let spans: Vec<Span> = (0..board.width as i32)
                .map(|x| match canvas.get(Cell::new(x, y)) {
                    Some(fill) => {
                        Span::styled("[]", Style::default().fg(border).bg(to_color(fill)))
                    }
                    None => Span::styled("  ", Style::default().bg(background)),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(border))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, metrics: &GameMetrics, length: usize) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Apples: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.apples.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(length.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_length.to_string(),
                Style::default().fg(Color::White),
            ),
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

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Terminal extent of `cells` board cells plus the two frame lines
fn bordered(cells: u32, per_cell: u16) -> u16 {
    u16::try_from(cells)
        .unwrap_or(u16::MAX)
        .saturating_mul(per_cell)
        .saturating_add(2)
}

/// Rect of at most `width` x `height` centred inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
