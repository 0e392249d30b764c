//! Terminal backend.
//!
//! Uses a cell buffer approach for per-character color control: rectangles
//! and text are rasterized into a 2D grid, which is then stamped row-by-row
//! as Paragraph widgets inside a titled border.

use super::renderer::{Renderer, Rgb, Rgba};
use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout, Write};

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.to_bytes();
    Color::Rgb(r, g, b)
}

/// A grid of cells that implements `Renderer`.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, discarding contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col < self.width && row < self.height {
            self.cells.get(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        &mut self.cells[row * self.width as usize + col]
    }

    /// Cells covered by `[lo, hi)` in grid units, at least one wide, clipped
    /// to `[0, limit)`.
    fn span(lo: f64, hi: f64, limit: u16) -> std::ops::Range<usize> {
        let start = lo.floor();
        let end = hi.ceil().max(start + 1.0);
        let clip = |v: f64| v.clamp(0.0, limit as f64) as usize;
        clip(start)..clip(end)
    }

    /// Stamp the buffer into `area`, merging runs of equal style into spans.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = self.width.min(area.width) as usize;
        let height = self.height.min(area.height);

        for row in 0..height {
            let start = row as usize * self.width as usize;
            let row_data = &self.cells[start..start + width];

            let mut spans: Vec<Span> = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for cell in row_data {
                let mut style = Style::default().fg(cell.fg).bg(cell.bg);
                if cell.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if style != current_style && !current_text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
                }
                current_style = style;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            let row_area = Rect::new(area.x, area.y + row, width as u16, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

impl Renderer for CellCanvas {
    fn clear(&mut self, color: Rgb) {
        let bg = to_color(color);
        self.cells.fill(Cell {
            bg,
            ..Cell::default()
        });
    }

    fn draw_rect(&mut self, offset_x: f64, offset_y: f64, scale_x: f64, scale_y: f64, color: Rgb) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let w = self.width as f64;
        let h = self.height as f64;

        let left = (offset_x - scale_x * 0.5 + 1.0) * 0.5 * w;
        let right = (offset_x + scale_x * 0.5 + 1.0) * 0.5 * w;
        // NDC y grows upward, rows grow downward
        let top = (1.0 - (offset_y + scale_y * 0.5)) * 0.5 * h;
        let bottom = (1.0 - (offset_y - scale_y * 0.5)) * 0.5 * h;

        let bg = to_color(color);
        for row in Self::span(top, bottom, self.height) {
            for col in Self::span(left, right, self.width) {
                let cell = self.cell_mut(col, row);
                cell.ch = ' ';
                cell.bg = bg;
            }
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let col = (x / SCREEN_WIDTH * self.width as f64).floor();
        let row = (y / SCREEN_HEIGHT * self.height as f64).floor();
        if row < 0.0 || row >= self.height as f64 || col >= self.width as f64 {
            return;
        }
        let row = row as usize;
        let Rgba(r, g, b, _) = color;

        for (i, ch) in text.chars().enumerate() {
            let c = col as i64 + i as i64;
            if c < 0 {
                continue;
            }
            if c >= self.width as i64 {
                break;
            }
            let cell = self.cell_mut(c as usize, row);
            cell.ch = ch;
            cell.fg = Color::Rgb(r, g, b);
            cell.bold = true;
        }
    }
}

/// Best-effort undo of a partial `enter`: show the cursor and leave the
/// alternate screen, ignoring write errors.
fn leave_screen<W: Write>(out: &mut W) {
    let _ = out.execute(cursor::Show);
    let _ = out.execute(LeaveAlternateScreen);
}

/// Full-screen terminal surface: raw mode, alternate screen, titled border.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    canvas: CellCanvas,
}

impl TerminalRenderer {
    /// Take over the terminal. Call `restore` before exiting.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Self::enter().inspect_err(|_| {
            leave_screen(&mut io::stdout());
            let _ = disable_raw_mode();
        })
    }

    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            canvas: CellCanvas::new(0, 0),
        })
    }

    /// Give the terminal back to the shell.
    /// Every step runs even if an earlier one fails; the first error wins.
    pub fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        let shown = backend.execute(cursor::Show).map(|_| ());
        let left = backend.execute(LeaveAlternateScreen).map(|_| ());
        raw.and(shown).and(left)
    }

    fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Renderer for TerminalRenderer {
    fn begin_frame(&mut self) -> io::Result<()> {
        let inner = Self::inner_area(self.terminal.size()?);
        self.canvas.resize(inner.width, inner.height);
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, offset_x: f64, offset_y: f64, scale_x: f64, scale_y: f64, color: Rgb) {
        self.canvas
            .draw_rect(offset_x, offset_y, scale_x, scale_y, color);
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        self.canvas.draw_text(x, y, text, color);
    }

    fn end_frame(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let area = frame.size();
            let block = Block::default()
                .title(WINDOW_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            canvas.render(frame, inner);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::gray(1.0);
    const BLACK: Rgb = Rgb::gray(0.0);

    /// Writer that fails every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_leave_screen_shows_cursor_and_leaves_alternate() {
        let mut out = Vec::new();
        leave_screen(&mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?25h"), "cursor not shown: {text:?}");
        assert!(text.contains("\x1b[?1049l"), "still in alternate screen: {text:?}");
    }

    #[test]
    fn test_leave_screen_ignores_write_errors() {
        leave_screen(&mut Broken);
    }

    #[test]
    fn test_clear_fills_background() {
        let mut canvas = CellCanvas::new(4, 3);
        canvas.clear(BLACK);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(canvas.cell(col, row).unwrap().bg, Color::Rgb(0, 0, 0));
            }
        }
    }

    #[test]
    fn test_full_screen_rect_covers_everything() {
        let mut canvas = CellCanvas::new(10, 6);
        canvas.clear(WHITE);
        canvas.draw_rect(0.0, 0.0, 2.0, 2.0, BLACK);
        assert!(canvas.cells.iter().all(|c| c.bg == Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_rect_maps_ndc_quadrant() {
        let mut canvas = CellCanvas::new(10, 10);
        canvas.clear(WHITE);
        // Top-right quadrant
        canvas.draw_rect(0.5, 0.5, 1.0, 1.0, BLACK);
        assert_eq!(canvas.cell(7, 2).unwrap().bg, Color::Rgb(0, 0, 0));
        assert_eq!(canvas.cell(2, 2).unwrap().bg, Color::Rgb(255, 255, 255));
        assert_eq!(canvas.cell(7, 7).unwrap().bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_thin_rect_still_visible() {
        let mut canvas = CellCanvas::new(20, 20);
        canvas.clear(WHITE);
        canvas.draw_rect(0.01, 0.01, 0.001, 0.001, BLACK);
        let painted = canvas
            .cells
            .iter()
            .filter(|c| c.bg == Color::Rgb(0, 0, 0))
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let mut canvas = CellCanvas::new(8, 8);
        canvas.clear(WHITE);
        canvas.draw_rect(1.5, 0.0, 0.2, 0.2, BLACK);
        canvas.draw_rect(-3.0, -3.0, 0.5, 0.5, BLACK);
        assert!(canvas.cells.iter().all(|c| c.bg == Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_text_maps_pixels_to_cells() {
        let mut canvas = CellCanvas::new(80, 24);
        canvas.clear(WHITE);
        canvas.draw_text(50.0, 50.0, "Hi", Rgba(0, 0, 0, 255));
        // 50/800*80 = 5, 50/600*24 = 2
        let h = canvas.cell(5, 2).unwrap();
        assert_eq!(h.ch, 'H');
        assert!(h.bold);
        assert_eq!(h.fg, Color::Rgb(0, 0, 0));
        assert_eq!(h.bg, Color::Rgb(255, 255, 255));
        assert_eq!(canvas.cell(6, 2).unwrap().ch, 'i');
    }

    #[test]
    fn test_text_truncated_at_edge() {
        let mut canvas = CellCanvas::new(4, 2);
        canvas.draw_text(0.0, 0.0, "Score: 12", Rgba(255, 255, 255, 255));
        let row: String = (0..4).map(|c| canvas.cell(c, 0).unwrap().ch).collect();
        assert_eq!(row, "Scor");
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut canvas = CellCanvas::new(2, 2);
        canvas.clear(BLACK);
        canvas.resize(3, 1);
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 1);
        assert_eq!(canvas.cell(0, 0), Some(&Cell::default()));
    }

    #[test]
    fn test_zero_sized_canvas_ignores_draws() {
        let mut canvas = CellCanvas::new(0, 0);
        canvas.clear(BLACK);
        canvas.draw_rect(0.0, 0.0, 1.0, 1.0, BLACK);
        canvas.draw_text(10.0, 10.0, "x", Rgba(0, 0, 0, 255));
        assert!(canvas.cell(0, 0).is_none());
    }
}
