//! Viewport-derived tile geometry and the visibility window
//!
//! Tiles are square: the side length is the viewport height divided by
//! the row count, so the field always fills the viewport vertically.
//! Horizontal placement subtracts the continuous scroll offset, so
//! tiles glide smoothly while the set of visible columns changes only
//! at integer offset boundaries.

use glam::Vec2;

use crate::consts::BACKGROUND_TEXTURE_SIZE;
use crate::field::Rect;

#[derive(Debug, Clone)]
pub struct FieldGeometry {
    viewport: Vec2,
    tile_size: f32,
    visible_columns: usize,
    background_size: Vec2,
}

impl FieldGeometry {
    pub fn new(viewport: Vec2, row_count: usize) -> Self {
        let tile_size = viewport.y / row_count as f32;
        let visible_columns = (viewport.x / tile_size) as usize + 1;
        let background_size = Vec2::new(
            viewport.x,
            viewport.x * BACKGROUND_TEXTURE_SIZE.y / BACKGROUND_TEXTURE_SIZE.x,
        );
        Self {
            viewport,
            tile_size,
            visible_columns,
            background_size,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// How many whole-or-partial tile columns fit across the viewport
    #[inline]
    pub fn visible_columns(&self) -> usize {
        self.visible_columns
    }

    /// Leftmost column eligible for drawing and collision testing
    #[inline]
    pub fn first_visible_column(&self, offset: f32) -> usize {
        offset as usize
    }

    /// Inclusive column range to scan. The upper bound is one past the
    /// visible count so a partially scrolled-in column at the right
    /// edge is always covered.
    pub fn column_range(&self, offset: f32) -> std::ops::RangeInclusive<usize> {
        let first = self.first_visible_column(offset);
        first..=first + self.visible_columns
    }

    /// Screen rectangle of a tile under the current offset. Row 0 is
    /// the bottom of the field; the vertical mapping places it at the
    /// top of the screen-space stack, exactly as the field is authored
    /// to be viewed.
    #[inline]
    pub fn tile_rect(&self, column: usize, row: usize, offset: f32) -> Rect {
        Rect::new(
            (column as f32 - offset) * self.tile_size,
            row as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Background strip: viewport wide, height from the source texture
    /// aspect ratio, anchored at the top-left corner.
    pub fn background_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.background_size.x, self.background_size.y)
    }
}
