//! Scrollfield - a continuously scrolling tile playfield
//!
//! Core modules:
//! - `field`: Deterministic scrolling/collision engine (tile grid, scroll
//!   clock, visibility window, directional collision probe)
//! - `render`: Narrow interface to an external sprite renderer
//! - `tuning`: Data-driven gameplay constants

pub mod field;
pub mod render;
pub mod tuning;

pub use field::{Contact, Direction, FieldError, Playfield, Rect, TileGrid, TileKind};
pub use render::{DrawSurface, TileSprite};
pub use tuning::FieldTuning;

/// Playfield configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed demo-loop timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Viewport dimensions (logical pixels)
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Base scroll rate, in tile columns per second
    pub const BASE_SCROLL_RATE: f32 = 3.0;
    /// Rate multiplier applied each time the scroll offset wraps a full
    /// field width. The field only ever speeds up.
    pub const SCROLL_GROWTH: f32 = 1.1;

    /// Squeeze policy: fraction of the hitbox kept along the axis
    /// perpendicular to travel (centered shrink)
    pub const SQUEEZE_LENGTH_FRACTION: f32 = 0.9;
    /// Squeeze policy: fraction kept along the travel axis (anchored at
    /// the leading edge)
    pub const SQUEEZE_THICKNESS_FRACTION: f32 = 0.25;

    /// Source dimensions of the background texture. Only the aspect ratio
    /// matters: the strip is stretched to the viewport width.
    pub const BACKGROUND_TEXTURE_SIZE: Vec2 = Vec2::new(1920.0, 1080.0);
}
