use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{
    GRID, Sprite, background_rows, color_width, has_check_overlay, piece_at, square_fill,
};
use crate::{COLORS, SWATCH_NAMES};

/// Machine-readable description of a sheet, for consumers that crop cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteManifest {
    pub square_size: u32,
    pub width: u32,
    pub height: u32,
    pub swatches: Vec<SwatchEntry>,
    pub cells: Vec<CellEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwatchEntry {
    pub name: String,
    pub fill: String,
    pub x: u32,
    pub width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellEntry {
    pub column: u32,
    pub row: u32,
    pub square: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<String>,
    pub check: bool,
}

impl SpriteManifest {
    pub fn new(sprite: &Sprite) -> SpriteManifest {
        let sq = sprite.square();
        let cw = color_width(sq);
        let swatches = SWATCH_NAMES
            .iter()
            .zip(&COLORS[4..])
            .enumerate()
            .map(|(i, (name, fill))| SwatchEntry {
                name: name.to_string(),
                fill: fill.to_string(),
                x: sq * 4 + cw * i as u32,
                width: cw,
            })
            .collect();

        let mut cells = Vec::new();
        for column in 0..GRID {
            for row in background_rows(column) {
                cells.push(CellEntry {
                    column,
                    row,
                    square: square_fill(column).to_string(),
                    piece: piece_at(column, row).map(|p| p.glyph_id()),
                    check: has_check_overlay(column, row),
                });
            }
        }

        SpriteManifest {
            square_size: sq,
            width: sprite.width(),
            height: sprite.height(),
            swatches,
            cells,
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}
