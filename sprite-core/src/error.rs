use thiserror::Error;

/// Everything that can go wrong while producing a sprite sheet. None of these
/// are recoverable; callers are expected to abort.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("glyph fragment {id:?} is not well-formed XML")]
    MalformedFragment {
        id: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("glyph fragment requested as {expected:?} has root id {found:?}")]
    FragmentId {
        expected: String,
        found: Option<String>,
    },
    #[error("square size {0} is out of range")]
    SquareSize(u32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize layout manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
