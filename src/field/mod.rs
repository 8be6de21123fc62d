//! Deterministic playfield engine
//!
//! All gameplay-visible behavior lives here and must stay deterministic:
//! - Immutable tile grid after load
//! - Scroll state mutated only by `Playfield::tick`
//! - Stable scan order (columns left to right, rows bottom to top)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod grid;
pub mod playfield;
pub mod probe;
pub mod rect;
pub mod scroll;

pub use geometry::FieldGeometry;
pub use grid::{LevelData, TileGrid, TileKind};
pub use playfield::Playfield;
pub use probe::{squeeze, Contact, Direction, SqueezePolicy};
pub use rect::Rect;
pub use scroll::ScrollClock;

use std::error::Error;
use std::fmt;

/// Failures raised by the playfield engine.
///
/// Collision ambiguity is never an error - it is absorbed into
/// [`Contact`]. Errors are reserved for a broken level source and for
/// tile lookups outside the padded grid, which cannot happen while the
/// scroll offset invariant holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The level source ended early or declared impossible dimensions.
    /// Fatal: a playfield cannot be constructed from it.
    MalformedLevel(String),
    /// A tile lookup past the padded grid bounds.
    OutOfRange { column: usize, row: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MalformedLevel(why) => write!(f, "malformed level: {why}"),
            FieldError::OutOfRange { column, row } => {
                write!(f, "tile index ({column}, {row}) out of range")
            }
        }
    }
}

impl Error for FieldError {}
