//! Terminal surface
//!
//! Rasterizes the 400x600 field onto a character grid and flushes it with
//! crossterm. All terminal I/O lives here; the draw pass knows nothing
//! about cells or escape codes.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Print},
    terminal,
};

use super::{Color, Surface};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

fn to_term_color(color: Color) -> style::Color {
    match color {
        Color::White => style::Color::White,
        Color::Red => style::Color::Red,
        Color::DarkRed => style::Color::DarkRed,
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Yellow => style::Color::Yellow,
        Color::Magenta => style::Color::Magenta,
        Color::DarkGrey => style::Color::DarkGrey,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::White,
};

/// Character-grid implementation of [`Surface`]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            cells: vec![EMPTY; cols.max(1) as usize * rows.max(1) as usize],
        }
    }

    fn scale_x(&self, x: f32) -> i32 {
        (x * self.cols as f32 / FIELD_WIDTH) as i32
    }

    fn scale_y(&self, y: f32) -> i32 {
        (y * self.rows as f32 / FIELD_HEIGHT) as i32
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = cell;
    }

    /// Flush the grid to the terminal
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut current: Option<Color> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.ch == ' ' {
                    out.queue(Print(' '))?;
                    continue;
                }
                if current != Some(cell.color) {
                    out.queue(style::SetForegroundColor(to_term_color(cell.color)))?;
                    current = Some(cell.color);
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        // Full-field rects are tints; render them as a light shade so the
        // entities drawn on top stay readable.
        let ch = if w >= FIELD_WIDTH { '░' } else { '█' };
        let (c0, r0) = (self.scale_x(x), self.scale_y(y));
        let (c1, r1) = (self.scale_x(x + w), self.scale_y(y + h));
        for row in r0..=r1.max(r0) {
            for col in c0..c1.max(c0 + 1) {
                self.put(col, row, Cell { ch, color });
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        let rc = (self.scale_x(r).max(1), self.scale_y(r).max(1));
        let (cc, cr) = (self.scale_x(x), self.scale_y(y));
        for dr in -rc.1..=rc.1 {
            for dc in -rc.0..=rc.0 {
                let nx = dc as f32 / rc.0 as f32;
                let ny = dr as f32 / rc.1 as f32;
                if nx * nx + ny * ny <= 1.0 {
                    self.put(cc + dc, cr + dr, Cell { ch: '●', color });
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _size: f32, color: Color) {
        let row = self.scale_y(y);
        let start = self.scale_x(x);
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i32, row, Cell { ch, color });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_at(surface: &TerminalSurface, col: u16, row: u16) -> Cell {
        surface.cells[row as usize * surface.cols as usize + col as usize]
    }

    #[test]
    fn rect_maps_to_scaled_cells() {
        let mut s = TerminalSurface::new(80, 30);
        // Player-sized rect at the origin: 40/400 of 80 cols = 8 cells wide
        s.fill_rect(0.0, 0.0, 40.0, 20.0, Color::White);
        assert_eq!(cell_at(&s, 0, 0).ch, '█');
        assert_eq!(cell_at(&s, 7, 0).ch, '█');
        assert_eq!(cell_at(&s, 8, 0).ch, ' ');
    }

    #[test]
    fn full_field_rect_renders_as_tint() {
        let mut s = TerminalSurface::new(80, 30);
        s.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, Color::DarkRed);
        assert_eq!(cell_at(&s, 40, 15).ch, '░');
    }

    #[test]
    fn out_of_bounds_draws_are_dropped() {
        let mut s = TerminalSurface::new(80, 30);
        // Hazard above the field (spawn row) must not panic or wrap
        s.fill_circle(200.0, -10.0, 10.0, Color::Red);
        s.draw_text("x", 5000.0, 5000.0, 20.0, Color::White);
    }

    #[test]
    fn text_lands_at_scaled_position() {
        let mut s = TerminalSurface::new(80, 30);
        s.draw_text("Score", 10.0, 30.0, 20.0, Color::White);
        let col = (10.0 * 80.0 / FIELD_WIDTH) as u16;
        let row = (30.0 * 30.0 / FIELD_HEIGHT) as u16;
        assert_eq!(cell_at(&s, col, row).ch, 'S');
        assert_eq!(cell_at(&s, col + 4, row).ch, 'e');
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut s = TerminalSurface::new(10, 10);
        s.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, Color::DarkRed);
        s.clear();
        assert!(s.cells.iter().all(|c| c.ch == ' '));
    }
}
