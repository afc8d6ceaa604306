//! Decorative radial glow painted behind the chat
//!
//! The animation runs in virtual pixels so the reference margin keeps its
//! meaning on a terminal: one cell is 8 px wide and 16 px tall.

use crate::tui::theme;
use glowchat_core::animation::{Offset, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Diameter of the glow disc
pub const GLOW_DIAMETER_PX: f64 = 300.0;

/// Gradient fades to nothing at this fraction of the radius
const FADE_END: f64 = 0.9;

/// Viewport of a terminal of `cols` x `rows` cells
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport::new(
        f64::from(cols) * CELL_WIDTH_PX,
        f64::from(rows) * CELL_HEIGHT_PX,
    )
}

/// Glow opacity for the cell at `col`, `row` when the disc's top-left corner sits at `offset`
pub fn alpha_at(col: u16, row: u16, offset: Offset) -> f64 {
    let radius = GLOW_DIAMETER_PX / 2.0;
    let px = (f64::from(col) + 0.5) * CELL_WIDTH_PX;
    let py = (f64::from(row) + 0.5) * CELL_HEIGHT_PX;
    let dx = px - (offset.x + radius);
    let dy = py - (offset.y + radius);
    let distance = (dx * dx + dy * dy).sqrt() / radius;

    if distance >= FADE_END {
        0.0
    } else {
        theme::GLOW_ALPHA * (1.0 - distance / FADE_END)
    }
}

/// Glow colour over the black canvas
pub fn color_at(col: u16, row: u16, offset: Offset) -> Color {
    let alpha = alpha_at(col, row, offset);
    let (r, g, b) = theme::GLOW;
    let mix = |channel: u8| (f64::from(channel) * alpha).round() as u8;
    Color::Rgb(mix(r), mix(g), mix(b))
}

/// Paints every cell's background; foreground content is drawn on top afterwards
pub struct GlowLayer {
    offset: Offset,
}

impl GlowLayer {
    pub fn new(offset: Offset) -> Self {
        Self { offset }
    }
}

impl Widget for GlowLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut(Position::new(col, row)) {
                    cell.set_bg(color_at(col, row, self.offset));
                }
            }
        }
    }
}
