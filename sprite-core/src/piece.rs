use serde::{Deserialize, Serialize};

/// Canonical piece names, indexed by role ordinal. Slot 0 is unused so that
/// pawn..king map to 1..=6.
pub const PIECE_NAMES: [Option<&str>; 7] = [
    None,
    Some("pawn"),
    Some("knight"),
    Some("bishop"),
    Some("rook"),
    Some("queen"),
    Some("king"),
];

pub fn piece_name(ordinal: usize) -> Option<&'static str> {
    PIECE_NAMES.get(ordinal).copied().flatten()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }

    pub fn is_white(self) -> bool {
        self == Color::White
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    pub fn from_ordinal(ordinal: usize) -> Option<Role> {
        match ordinal {
            1 => Some(Role::Pawn),
            2 => Some(Role::Knight),
            3 => Some(Role::Bishop),
            4 => Some(Role::Rook),
            5 => Some(Role::Queen),
            6 => Some(Role::King),
            _ => None,
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        piece_name(self.ordinal()).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub fn new(color: Color, role: Role) -> Piece {
        Piece { color, role }
    }

    /// All 12 pieces, black first, each color in role order.
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL
            .into_iter()
            .flat_map(|c| Role::ALL.into_iter().map(move |r| Piece::new(c, r)))
    }

    /// Identifier of the glyph definition, e.g. `white-knight`.
    pub fn glyph_id(self) -> String {
        format!("{}-{}", self.color.name(), self.role.name())
    }
}
