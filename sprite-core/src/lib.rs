use std::collections::BTreeSet;
use std::io::Write;

use tracing::{debug, info};

pub mod error;
pub mod glyphs;
pub mod layout;
pub mod manifest;
pub mod piece;
pub mod svg;

pub use error::{Result, SpriteError};
pub use glyphs::{CHECK_GRADIENT_ID, GlyphProvider, StandardGlyphs};
pub use layout::{Sprite, SpriteKey};
pub use piece::{Color, Piece, Role};

use layout::{
    GRID, background_rows, color_width, has_check_overlay, piece_at, square_fill,
};
use svg::{Element, SVG_NS, XLINK_NS};

pub const COLORS: [&str; 9] = [
    "#dee3e6", // light square
    "#8ca2ad", // dark square
    "#ced26b", // highlighted light square
    "#aaa23b", // highlighted dark square
    "#262421", // dark background
    "#bababa", // text color
    "#bf811d", // title color
    "#b72fc6", // bot color
    "#706f6e", // 50% text color on dark background
];

/// Palette entries shown in the swatch strip, starting at `COLORS[4]`.
pub const SWATCH_COUNT: usize = 5;
pub const SWATCH_NAMES: [&str; SWATCH_COUNT] =
    ["background", "text", "title", "bot", "dim-text"];

/// Assemble the sprite sheet document.
///
/// Layout, in document order: `defs` with every glyph and the check
/// gradient, the swatch strip on row 0 of the white half, then per column a
/// background rect followed by one `use` per row 1..=7. The check overlay
/// rect precedes the `use` of its cell so the king paints on top.
pub fn build_sprite_svg<G: GlyphProvider + ?Sized>(glyphs: &G) -> Result<Element> {
    // Every coordinate below is at most `size`.
    let sq = glyphs.square_size();
    let size = match sq.checked_mul(GRID) {
        Some(size) if sq > 0 => size,
        _ => return Err(SpriteError::SquareSize(sq)),
    };

    let mut root = Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("version", "1.1")
        .attr("xmlns:xlink", XLINK_NS)
        .attr("viewBox", format!("0 0 {} {}", size, size));

    let mut defined = BTreeSet::new();
    let mut defs = Element::new("defs");
    for piece in Piece::all() {
        let id = piece.glyph_id();
        let fragment = glyphs.piece_fragment(piece);
        defs.push_raw(glyphs::validate_fragment(&id, &fragment)?);
        debug!(%id, "added glyph definition");
        defined.insert(id);
    }
    let gradient = glyphs.check_gradient();
    defs.push_raw(glyphs::validate_fragment(CHECK_GRADIENT_ID, &gradient)?);
    defined.insert(CHECK_GRADIENT_ID.to_string());
    root.push(defs);

    let cw = color_width(sq);
    for (x, color) in COLORS[4..].iter().enumerate() {
        root.push(
            Element::new("rect")
                .attr("x", sq * 4 + cw * x as u32)
                .attr("y", 0)
                .attr("width", cw)
                .attr("height", sq)
                .attr("stroke", "none")
                .attr("fill", color),
        );
    }

    let mut uses = 0usize;
    for x in 0..GRID {
        let rows = background_rows(x);
        root.push(
            Element::new("rect")
                .attr("x", sq * x)
                .attr("y", sq * rows.start)
                .attr("width", sq)
                .attr("height", sq * rows.len() as u32)
                .attr("stroke", "none")
                .attr("fill", square_fill(x)),
        );

        for y in 1..GRID {
            if has_check_overlay(x, y) {
                root.push(
                    Element::new("rect")
                        .attr("x", sq * x)
                        .attr("y", sq * y)
                        .attr("width", sq)
                        .attr("height", sq)
                        .attr("fill", format!("url(#{})", CHECK_GRADIENT_ID)),
                );
            }

            let Some(piece) = piece_at(x, y) else {
                continue;
            };
            let id = piece.glyph_id();
            debug_assert!(defined.contains(&id), "#{id} has no definition");
            root.push(
                Element::new("use")
                    .attr("xlink:href", format!("#{}", id))
                    .attr("transform", format!("translate({}, {})", sq * x, sq * y)),
            );
            uses += 1;
        }
    }
    debug!(square = sq, uses, "laid out sprite sheet");

    Ok(root)
}

/// Build the sheet and write the serialized document to `sink`.
pub fn make_sprite<W, G>(sink: &mut W, glyphs: &G) -> Result<usize>
where
    W: Write + ?Sized,
    G: GlyphProvider + ?Sized,
{
    let doc = build_sprite_svg(glyphs)?.to_document();
    sink.write_all(doc.as_bytes())?;
    info!(bytes = doc.len(), "wrote sprite sheet");
    Ok(doc.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn root_attributes_in_order() {
        let root = build_sprite_svg(&StandardGlyphs).unwrap();
        let keys: Vec<&str> = root.attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["xmlns", "version", "xmlns:xlink", "viewBox"]);
        assert_eq!(root.get("viewBox"), Some("0 0 360 360"));
    }

    #[test]
    fn document_order() {
        let root = build_sprite_svg(&StandardGlyphs).unwrap();
        let names: Vec<&str> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names[0], "defs");
        assert!(names[1..=SWATCH_COUNT].iter().all(|n| *n == "rect"));
        // 1 defs + 5 swatches + 8 backgrounds + 56 uses + 1 overlay
        assert_eq!(names.len(), 1 + 5 + 8 + 56 + 1);
        assert_eq!(names.iter().filter(|n| **n == "use").count(), 56);
    }

    #[test]
    fn make_sprite_reports_bytes_written() {
        let mut out = Vec::new();
        let n = make_sprite(&mut out, &StandardGlyphs).unwrap();
        assert_eq!(n, out.len());
        assert!(out.starts_with(b"<?xml"));
    }

    struct MissingKing;

    impl GlyphProvider for MissingKing {
        fn square_size(&self) -> u32 {
            45
        }

        fn piece_fragment(&self, piece: Piece) -> Cow<'_, str> {
            if piece.role == Role::King {
                Cow::Borrowed("<g id=\"king\"/>")
            } else {
                StandardGlyphs.piece_fragment(piece).into_owned().into()
            }
        }

        fn check_gradient(&self) -> Cow<'_, str> {
            StandardGlyphs.check_gradient().into_owned().into()
        }
    }

    #[test]
    fn bad_provider_aborts_without_output() {
        let mut out = Vec::new();
        let err = make_sprite(&mut out, &MissingKing).unwrap_err();
        assert!(matches!(err, SpriteError::FragmentId { ref expected, .. } if expected == "black-king"));
        assert!(out.is_empty());
    }

    /// Wraps every piece in a standalone-document prolog.
    struct WithProlog;

    impl GlyphProvider for WithProlog {
        fn square_size(&self) -> u32 {
            45
        }

        fn piece_fragment(&self, piece: Piece) -> Cow<'_, str> {
            let body = StandardGlyphs.piece_fragment(piece);
            Cow::Owned(format!("<?xml version=\"1.0\"?>\n<!-- {} -->\n{}\n", piece.glyph_id(), body))
        }

        fn check_gradient(&self) -> Cow<'_, str> {
            StandardGlyphs.check_gradient().into_owned().into()
        }
    }

    #[test]
    fn fragment_prolog_is_not_copied() {
        let mut out = Vec::new();
        make_sprite(&mut out, &WithProlog).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("<?xml").count(), 1);
        assert!(!text.contains("<!--"));
        let doc = roxmltree::Document::parse(&text).unwrap();
        assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 360 360"));
    }

    struct Oversized(u32);

    impl GlyphProvider for Oversized {
        fn square_size(&self) -> u32 {
            self.0
        }

        fn piece_fragment(&self, piece: Piece) -> Cow<'_, str> {
            StandardGlyphs.piece_fragment(piece).into_owned().into()
        }

        fn check_gradient(&self) -> Cow<'_, str> {
            StandardGlyphs.check_gradient().into_owned().into()
        }
    }

    #[test]
    fn square_size_out_of_range() {
        for sq in [0, u32::MAX / 4] {
            let err = build_sprite_svg(&Oversized(sq)).unwrap_err();
            assert!(matches!(err, SpriteError::SquareSize(s) if s == sq));
        }
        let root = build_sprite_svg(&Oversized(u32::MAX / 8)).unwrap();
        let size = (u32::MAX / 8) * 8;
        assert_eq!(root.get("viewBox"), Some(format!("0 0 {size} {size}").as_str()));
    }
}
