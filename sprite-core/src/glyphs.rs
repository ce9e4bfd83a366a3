use std::borrow::Cow;

use crate::error::{Result, SpriteError};
use crate::piece::{Color, Piece, Role};

/// Identifier of the radial gradient painted under a king in check.
pub const CHECK_GRADIENT_ID: &str = "check_gradient";

/// Source of the reusable vector definitions placed in the sheet's `defs`.
///
/// Every piece fragment must be a single element whose `id` equals
/// [`Piece::glyph_id`], drawn in a `square_size` × `square_size` box with its
/// origin at the top left. The gradient fragment must carry
/// [`CHECK_GRADIENT_ID`].
///
/// `square_size` must be non-zero and small enough that `8 * square_size`
/// fits in a `u32`; larger values are rejected with
/// [`SpriteError::SquareSize`].
pub trait GlyphProvider {
    fn square_size(&self) -> u32;
    fn piece_fragment(&self, piece: Piece) -> Cow<'_, str>;
    fn check_gradient(&self) -> Cow<'_, str>;
}

/// Built-in piece set drawn on a 45 unit square.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardGlyphs;

pub const SQUARE_SIZE: u32 = 45;

const CHECK_GRADIENT: &str = concat!(
    r##"<radialGradient id="check_gradient" r="0.5">"##,
    r##"<stop offset="0%" stop-color="#ff0000" stop-opacity="1.0"/>"##,
    r##"<stop offset="50%" stop-color="#e70000" stop-opacity="1.0"/>"##,
    r##"<stop offset="100%" stop-color="#9e0000" stop-opacity="0.0"/>"##,
    "</radialGradient>"
);

struct Outline {
    body: &'static [&'static str],
    // Inner strokes; drawn unfilled in the contrasting color on black pieces.
    detail: &'static [&'static str],
}

fn outline(role: Role) -> Outline {
    match role {
        Role::Pawn => Outline {
            body: &["M22.5 9a4 4 0 0 0-3.2 6.4A5.6 5.6 0 0 0 18.4 26C15.4 27.1 11 31.6 11 39.5h23c0-7.9-4.4-12.4-7.4-13.5a5.6 5.6 0 0 0-.9-10.6A4 4 0 0 0 22.5 9z"],
            detail: &[],
        },
        Role::Knight => Outline {
            body: &[
                "M22 10c10.5 1 16.5 8 16 29H15c0-9 10-6.5 8-21",
                "M24 18c.4 2.9-5.6 7.4-8 9-3 2-2.8 4.3-5 4-1-.9 1.4-3 0-3-1 0 .2 1.2-1 2-1 0-4 1-4-4 0-2 6-12 6-12s1.9-1.9 2-3.5c-.7-1-.5-2-.5-3 1-1 3 2.5 3 2.5h2s.8-2 2.5-3c1 0 1 3 1 3",
            ],
            detail: &["M9.5 25.5a.5.5 0 1 1-1 0 .5.5 0 1 1 1 0z", "M15 15.5a.5 1.5 30 1 1-.9-.5.5 1.5 30 1 1 .9.5z"],
        },
        Role::Bishop => Outline {
            body: &[
                "M9 36c3.4-1 10.1.4 13.5-2 3.4 2.4 10.1 1 13.5 2 0 0 1.6.5 3 2-.7 1-1.6 1-3 .5-3.4-1-10.1.5-13.5-1-3.4 1.5-10.1 0-13.5 1-1.4.5-2.3.5-3-.5 1.4-1.9 3-2 3-2z",
                "M15 32c2.5 2.5 12.5 2.5 15 0 .5-1.5 0-2 0-2 0-2.5-2.5-4-2.5-4 5.5-1.5 6-11.5-5-15.5-11 4-10.5 14-5 15.5 0 0-2.5 1.5-2.5 4 0 0-.5.5 0 2z",
                "M25 8a2.5 2.5 0 1 1-5 0 2.5 2.5 0 1 1 5 0z",
            ],
            detail: &["M17.5 26h10M15 30h15M22.5 15.5v5M20 18h5"],
        },
        Role::Rook => Outline {
            body: &[
                "M9 39h27v-3H9v3z",
                "M12 36v-4h21v4H12z",
                "M11 14V9h4v2h5V9h5v2h5V9h4v5l-3 3H14l-3-3z",
                "M14 17h17v12.5H14z",
                "M14 29.5L12.5 32h20L31 29.5z",
            ],
            detail: &["M11 14h23M14 17h17M14 29.5h17"],
        },
        Role::Queen => Outline {
            body: &[
                "M9 26c8.5-1.5 21-1.5 27 0l2.5-12.5L31 25l-.3-14.1-5.2 13.6-3-14.5-3 14.5-5.2-13.6L14 25 6.5 13.5 9 26z",
                "M9 26c0 2 1.5 2 2.5 4 1 1.5 1 1 .5 3.5-1.5 1-1.5 2.5-1.5 2.5-1.5 1.5.5 2.5.5 2.5 6.5 1 16.5 1 23 0 0 0 1.5-1 0-2.5 0 0 .5-1.5-1-2.5-.5-2.5-.5-2 .5-3.5 1-2 2.5-2 2.5-4-8.5-1.5-18.5-1.5-27 0z",
                "M8 12a2 2 0 1 1-4 0 2 2 0 1 1 4 0zM24.5 7.5a2 2 0 1 1-4 0 2 2 0 1 1 4 0zM41 12a2 2 0 1 1-4 0 2 2 0 1 1 4 0zM16 8.5a2 2 0 1 1-4 0 2 2 0 1 1 4 0zM33 9a2 2 0 1 1-4 0 2 2 0 1 1 4 0z",
            ],
            detail: &["M11.5 30c3.5-1 18.5-1 22 0M12 33.5c6-1 15-1 21 0"],
        },
        Role::King => Outline {
            body: &[
                "M22.5 25s4.5-7.5 3-10.5c0 0-1-2.5-3-2.5s-3 2.5-3 2.5c-1.5 3 3 10.5 3 10.5",
                "M11.5 37c5.5 3.5 15.5 3.5 21 0v-7s9-4.5 6-10.5c-4-6.5-13.5-3.5-16 4V27v-3.5c-3.5-7.5-13-10.5-16-4-3 6 5 10 5 10V37z",
            ],
            detail: &[
                "M22.5 11.6V6M20 8h5",
                "M11.5 30c5.5-3 15.5-3 21 0M11.5 33.5c5.5-3 15.5-3 21 0M11.5 37c5.5-3 15.5-3 21 0",
            ],
        },
    }
}

fn render_piece(piece: Piece) -> String {
    let (fill, stroke, detail_stroke) = match piece.color {
        Color::White => ("#fff", "#000", "#000"),
        Color::Black => ("#000", "#000", "#ececec"),
    };
    let o = outline(piece.role);
    let mut s = format!(
        "<g id=\"{}\" class=\"{} {}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\">",
        piece.glyph_id(),
        piece.color.name(),
        piece.role.name(),
        fill,
        stroke
    );
    for d in o.body {
        s.push_str(&format!("<path d=\"{}\"/>", d));
    }
    for d in o.detail {
        s.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\"/>",
            d, detail_stroke
        ));
    }
    s.push_str("</g>");
    s
}

impl GlyphProvider for StandardGlyphs {
    fn square_size(&self) -> u32 {
        SQUARE_SIZE
    }

    fn piece_fragment(&self, piece: Piece) -> Cow<'_, str> {
        Cow::Owned(render_piece(piece))
    }

    fn check_gradient(&self) -> Cow<'_, str> {
        Cow::Borrowed(CHECK_GRADIENT)
    }
}

/// Check that `markup` is one well-formed element whose root `id` is
/// `expected_id`, returning just that element's markup. Any prolog (XML
/// declaration, comments, processing instructions) is dropped so the
/// fragment can sit inside another document.
pub fn validate_fragment<'a>(expected_id: &str, markup: &'a str) -> Result<&'a str> {
    let markup = markup.trim();
    let doc = roxmltree::Document::parse(markup).map_err(|source| {
        SpriteError::MalformedFragment {
            id: expected_id.to_string(),
            source,
        }
    })?;
    let found = doc.root_element().attribute("id");
    if found != Some(expected_id) {
        return Err(SpriteError::FragmentId {
            expected: expected_id.to_string(),
            found: found.map(str::to_string),
        });
    }
    Ok(&markup[doc.root_element().range()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fragments_are_well_formed() {
        let glyphs = StandardGlyphs;
        for piece in Piece::all() {
            let frag = glyphs.piece_fragment(piece);
            validate_fragment(&piece.glyph_id(), &frag).unwrap();
        }
        validate_fragment(CHECK_GRADIENT_ID, &glyphs.check_gradient()).unwrap();
    }

    #[test]
    fn black_details_are_light() {
        let frag = render_piece(Piece::new(Color::Black, Role::King));
        assert!(frag.contains("stroke=\"#ececec\""));
        assert!(frag.starts_with("<g id=\"black-king\" class=\"black king\" fill=\"#000\""));
    }

    #[test]
    fn strips_prolog_around_root() {
        let markup = "<?xml version=\"1.0\"?>\n<!-- pawn --><g id=\"white-pawn\"><path d=\"M0 0\"/></g>\n";
        let frag = validate_fragment("white-pawn", markup).unwrap();
        assert_eq!(frag, "<g id=\"white-pawn\"><path d=\"M0 0\"/></g>");
    }

    #[test]
    fn rejects_malformed_markup() {
        let err = validate_fragment("white-pawn", "<g id=\"white-pawn\"><path></g>").unwrap_err();
        assert!(matches!(err, SpriteError::MalformedFragment { ref id, .. } if id == "white-pawn"));
    }

    #[test]
    fn rejects_wrong_or_missing_id() {
        let err = validate_fragment("white-pawn", "<g id=\"black-pawn\"/>").unwrap_err();
        assert!(matches!(
            err,
            SpriteError::FragmentId { found: Some(ref f), .. } if f == "black-pawn"
        ));
        let err = validate_fragment("white-pawn", "<g/>").unwrap_err();
        assert!(matches!(err, SpriteError::FragmentId { found: None, .. }));
    }
}
