//! Composition root: grid + scroll clock + geometry + probe policy
//!
//! Owns all playfield state for its lifetime. Per frame the host calls
//! `tick`, then issues collision queries for its entities, then `draw`.

use crate::field::{
    geometry::FieldGeometry,
    grid::{LevelData, TileGrid, TileKind},
    probe,
    probe::{Contact, Direction, SqueezePolicy},
    rect::Rect,
    scroll::ScrollClock,
    FieldError,
};
use crate::render::{DrawSurface, TileSprite};
use crate::tuning::FieldTuning;

pub struct Playfield {
    grid: TileGrid,
    scroll: ScrollClock,
    geometry: FieldGeometry,
    squeeze: SqueezePolicy,
}

impl Playfield {
    /// Build a playfield from a level source. Fatal on a malformed
    /// level; a partially constructed playfield never escapes.
    pub fn load(source: &str, tuning: &FieldTuning) -> Result<Self, FieldError> {
        let level = LevelData::parse(source)?;
        let geometry = FieldGeometry::new(tuning.viewport, level.height);
        let grid = TileGrid::with_wraparound(&level, geometry.visible_columns());
        let scroll = ScrollClock::new(
            tuning.scroll_rate,
            tuning.scroll_growth,
            grid.field_width() as f32,
        );

        log::info!(
            "level loaded: {}x{} tiles ({} columns padded), tile size {:.1}px",
            level.width,
            level.height,
            grid.column_count(),
            geometry.tile_size(),
        );

        Ok(Self {
            grid,
            scroll,
            geometry,
            squeeze: tuning.squeeze,
        })
    }

    /// Advance the scroll offset by the frame delta.
    pub fn tick(&mut self, dt: f32) {
        self.scroll.advance(dt);
    }

    /// Draw the background strip, then every non-empty tile in the
    /// visible window.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        surface.draw_sprite(TileSprite::Background, self.geometry.background_rect());

        for (kind, rect) in self.visible_tiles() {
            let sprite = match kind {
                TileKind::Solid => TileSprite::Block,
                TileKind::Hazard => TileSprite::Hazard,
                TileKind::Empty => continue,
            };
            surface.draw_sprite(sprite, rect);
        }
    }

    /// Classify a directional collision against the visible window.
    pub fn classify(&self, hitbox: Rect, direction: Direction) -> Contact {
        probe::classify(
            self.visible_tiles(),
            self.geometry.viewport().y,
            hitbox,
            direction,
            self.squeeze,
        )
    }

    /// Ceiling height for the given hitbox, see [`probe::nearest_up`].
    pub fn nearest_up(&self, hitbox: Rect) -> f32 {
        probe::nearest_up(self.visible_tiles(), self.geometry.tile_size(), hitbox)
    }

    /// Floor height for the given hitbox, see [`probe::nearest_down`].
    pub fn nearest_down(&self, hitbox: Rect) -> f32 {
        probe::nearest_down(
            self.visible_tiles(),
            self.geometry.viewport().y,
            self.geometry.tile_size(),
            hitbox,
        )
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.geometry.tile_size()
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    #[inline]
    pub fn scroll_rate(&self) -> f32 {
        self.scroll.rate()
    }

    #[inline]
    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Non-empty tiles in the current visible window, with their
    /// screen rectangles. Scan order is columns left to right, rows
    /// bottom to top.
    fn visible_tiles(&self) -> impl Iterator<Item = (TileKind, Rect)> + '_ {
        let offset = self.scroll.offset();
        let range = self.geometry.column_range(offset);
        // The wraparound band covers every offset below the field
        // width. The offset can also sit exactly on the period (the
        // wrap check is strict) or above it for one frame after a
        // giant delta; the clamp bounds the scan for those states.
        let last = (*range.end()).min(self.grid.column_count() - 1);

        (*range.start()..=last).flat_map(move |column| {
            (0..self.grid.row_count()).filter_map(move |row| {
                let kind = self.grid.get(column, row);
                (kind != TileKind::Empty)
                    .then(|| (kind, self.geometry.tile_rect(column, row, offset)))
            })
        })
    }
}
