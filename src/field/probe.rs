//! Directional collision probe
//!
//! The probe never tests the caller's hitbox directly. It first
//! squeezes a copy into a thin stick aligned with the direction of
//! travel, which kills the false corner clips that full-size rectangle
//! overlap produces at tile boundaries under a continuously scrolling
//! offset. Classification then fuses "touched anything" and "was it
//! lethal" into a single three-valued outcome.

use serde::{Deserialize, Serialize};

use crate::consts::{SQUEEZE_LENGTH_FRACTION, SQUEEZE_THICKNESS_FRACTION};
use crate::field::{Rect, TileKind};

/// Direction of travel for a collision query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Collision outcome tiers.
///
/// Priority inside one scan: any Hazard contact, or any Solid contact
/// while moving right, overrides an earlier survivable touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No tile touched at all
    None,
    /// Touched a Solid tile in a survivable direction, or the probe
    /// left the playfield vertically
    Safe,
    /// Lethal: a Hazard, or a Solid hit while moving right
    Unsafe,
}

/// Fixed shrink fractions for the squeeze transform
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SqueezePolicy {
    /// Fraction kept along the axis perpendicular to travel
    pub length: f32,
    /// Fraction kept along the travel axis
    pub thickness: f32,
}

impl Default for SqueezePolicy {
    fn default() -> Self {
        Self {
            length: SQUEEZE_LENGTH_FRACTION,
            thickness: SQUEEZE_THICKNESS_FRACTION,
        }
    }
}

/// Shrink a hitbox into a directional probe stick. The input is never
/// mutated; the result is always contained within it.
///
/// Perpendicular to travel the box shrinks to `length`, centered.
/// Along travel it shrinks to `thickness`, anchored at the leading
/// edge: Up keeps the top edge, Down the bottom, Right the right,
/// Left the left.
pub fn squeeze(hitbox: Rect, direction: Direction, policy: SqueezePolicy) -> Rect {
    let mut probe = hitbox;

    match direction {
        Direction::Up | Direction::Down => {
            probe.x += probe.w * (1.0 - policy.length) / 2.0;
            probe.w *= policy.length;
        }
        Direction::Left | Direction::Right => {
            probe.y += probe.h * (1.0 - policy.length) / 2.0;
            probe.h *= policy.length;
        }
    }

    match direction {
        Direction::Up => probe.h *= policy.thickness,
        Direction::Down => {
            probe.y += probe.h * (1.0 - policy.thickness);
            probe.h *= policy.thickness;
        }
        Direction::Right => {
            probe.x += probe.w * (1.0 - policy.thickness);
            probe.w *= policy.thickness;
        }
        Direction::Left => probe.w *= policy.thickness,
    }

    probe
}

/// Classify a hitbox against the supplied visible tiles.
///
/// A probe whose top leaves the playfield, or whose bottom reaches the
/// viewport bottom, is Safe regardless of tile contents: entities may
/// jump above the field or fall out of it without dying.
pub fn classify<I>(
    tiles: I,
    viewport_height: f32,
    hitbox: Rect,
    direction: Direction,
    policy: SqueezePolicy,
) -> Contact
where
    I: IntoIterator<Item = (TileKind, Rect)>,
{
    let probe = squeeze(hitbox, direction, policy);

    if probe.y < 0.0 || probe.bottom() >= viewport_height {
        return Contact::Safe;
    }

    let mut touched = false;
    for (kind, rect) in tiles {
        if probe.intersects(&rect) {
            if kind == TileKind::Hazard || direction == Direction::Right {
                return Contact::Unsafe;
            }
            touched = true;
        }
    }

    if touched { Contact::Safe } else { Contact::None }
}

/// Bottom edge of the closest tile above the hitbox, i.e. the ceiling
/// the hitbox top may rise to. Considers tiles whose top is strictly
/// above the (unsqueezed) hitbox top and which intersect it. With no
/// such tile the sentinel sits one tile above the field, so the result
/// degenerates to 0.
pub fn nearest_up<I>(tiles: I, tile_size: f32, hitbox: Rect) -> f32
where
    I: IntoIterator<Item = (TileKind, Rect)>,
{
    let mut best = -tile_size;
    for (_, rect) in tiles {
        if rect.y < hitbox.y && rect.y > best && hitbox.intersects(&rect) {
            best = rect.y;
        }
    }
    best + tile_size
}

/// Top edge, minus one tile, of the closest tile below the hitbox: the
/// floor level the hitbox top may drop to. Sentinel is the viewport
/// bottom, so with no tile below the result is one tile above it.
pub fn nearest_down<I>(tiles: I, viewport_height: f32, tile_size: f32, hitbox: Rect) -> f32
where
    I: IntoIterator<Item = (TileKind, Rect)>,
{
    let mut best = viewport_height;
    for (_, rect) in tiles {
        if rect.y > hitbox.y && rect.y < best && hitbox.intersects(&rect) {
            best = rect.y;
        }
    }
    best - tile_size
}
