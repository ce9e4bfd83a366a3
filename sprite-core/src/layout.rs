//! Where things live on the sheet. The builder draws from these rules and
//! consumers use [`Sprite::cell`] to crop the same cells back out.

use std::ops::Range;

use crate::glyphs::GlyphProvider;
use crate::piece::{Color, Piece, Role};
use crate::{COLORS, SWATCH_COUNT};

pub const GRID: u32 = 8;
/// The single cell that carries the check gradient under its king.
pub const CHECK_CELL: (u32, u32) = (6, 7);

/// Swatch width: two thirds of a square, rounded down.
pub fn color_width(square: u32) -> u32 {
    square * 2 / 3
}

pub fn column_color(column: u32) -> Color {
    if column >= 4 { Color::White } else { Color::Black }
}

/// Background fill of a column; the palette's four square colors cycle.
pub fn square_fill(column: u32) -> &'static str {
    COLORS[(column % 4) as usize]
}

/// Rows covered by a column's background. White-side columns leave row 0
/// free for the swatch strip.
pub fn background_rows(column: u32) -> Range<u32> {
    if column >= 4 { 1..GRID } else { 0..GRID }
}

/// Piece drawn at a cell. Row 7 repeats the king of row 6.
pub fn piece_at(column: u32, row: u32) -> Option<Piece> {
    if row == 0 || row >= GRID || column >= GRID {
        return None;
    }
    let role = Role::from_ordinal(row.min(6) as usize)?;
    Some(Piece::new(column_color(column), role))
}

pub fn has_check_overlay(column: u32, row: u32) -> bool {
    (column, row) == CHECK_CELL
}

/// What a consumer wants to draw on one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteKey {
    pub piece: Option<Piece>,
    pub dark_square: bool,
    pub highlight: bool,
    pub check: bool,
}

impl SpriteKey {
    fn column(&self) -> u32 {
        (if self.piece.is_some_and(|p| p.color.is_white()) {
            4
        } else {
            0
        }) + (if self.highlight { 2 } else { 0 })
            + (if self.dark_square { 1 } else { 0 })
    }

    fn row(&self) -> u32 {
        match self.piece {
            Some(piece) if self.check && piece.role == Role::King => 7,
            Some(piece) => piece.role.ordinal() as u32,
            None => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Geometry of a sheet drawn at a given square size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    square: u32,
}

impl Sprite {
    pub fn new(square: u32) -> Sprite {
        Sprite { square }
    }

    pub fn for_glyphs(glyphs: &impl GlyphProvider) -> Sprite {
        Sprite::new(glyphs.square_size())
    }

    pub fn square(&self) -> u32 {
        self.square
    }

    pub fn width(&self) -> u32 {
        self.square * GRID
    }

    pub fn height(&self) -> u32 {
        self.width()
    }

    /// Grid cell `(column, row)` holding the requested combination, or `None`
    /// when the sheet does not draw it.
    pub fn cell(&self, key: SpriteKey) -> Option<(u32, u32)> {
        if key.check {
            match key.piece {
                Some(p) if p.role == Role::King => {}
                _ => return None,
            }
        }
        let cell = (key.column(), key.row());
        if key.check && !has_check_overlay(cell.0, cell.1) {
            return None;
        }
        Some(cell)
    }

    pub fn cell_rect(&self, key: SpriteKey) -> Option<Rect> {
        self.cell(key).map(|(column, row)| Rect {
            x: column * self.square,
            y: row * self.square,
            width: self.square,
            height: self.square,
        })
    }

    /// Fill sampled for player bars: the first swatch.
    pub fn bar_color(&self) -> &'static str {
        COLORS[4]
    }

    /// A point on row 0 just past the swatch strip. Nothing is painted there.
    pub fn transparent_point(&self) -> (u32, u32) {
        (
            self.square * 4 + color_width(self.square) * SWATCH_COUNT as u32,
            0,
        )
    }
}
