//! Narrow interface to the external renderer
//!
//! The playfield never touches textures or the window system. It
//! selects one of three fixed sprite handles and emits positioned draw
//! calls through [`DrawSurface`]; the host binds those handles to real
//! assets.

use crate::field::Rect;

/// The three fixed asset handles the playfield draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSprite {
    Background,
    Block,
    Hazard,
}

/// A surface accepting positioned sprite draws.
///
/// Calls arrive in paint order: the background strip first, then tiles
/// column by column.
pub trait DrawSurface {
    fn draw_sprite(&mut self, sprite: TileSprite, rect: Rect);
}

/// Test surface that records every draw call in order.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<(TileSprite, Rect)>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn draw_sprite(&mut self, sprite: TileSprite, rect: Rect) {
        self.calls.push((sprite, rect));
    }
}
