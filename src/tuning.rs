//! Data-driven playfield tuning
//!
//! Defaults mirror the `consts` module; a JSON file can override them
//! for balancing without a rebuild.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts;
use crate::field::SqueezePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTuning {
    /// Viewport size in logical pixels
    pub viewport: Vec2,
    /// Base scroll rate in columns per second
    pub scroll_rate: f32,
    /// Rate multiplier applied on each field-width wrap
    pub scroll_growth: f32,
    /// Collision probe shrink fractions
    pub squeeze: SqueezePolicy,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT),
            scroll_rate: consts::BASE_SCROLL_RATE,
            scroll_growth: consts::SCROLL_GROWTH,
            squeeze: SqueezePolicy::default(),
        }
    }
}

impl FieldTuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("ignoring bad tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let tuning = FieldTuning::default();
        assert_eq!(tuning.viewport.x, consts::VIEWPORT_WIDTH);
        assert_eq!(tuning.viewport.y, consts::VIEWPORT_HEIGHT);
        assert_eq!(tuning.scroll_growth, consts::SCROLL_GROWTH);
        assert_eq!(tuning.squeeze.length, consts::SQUEEZE_LENGTH_FRACTION);
    }

    #[test]
    fn json_round_trip() {
        let tuning = FieldTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back = FieldTuning::from_json(&json).unwrap();
        assert_eq!(back.scroll_rate, tuning.scroll_rate);
        assert_eq!(back.viewport, tuning.viewport);
    }

    #[test]
    fn partial_overrides_rejected_cleanly() {
        // Unknown or missing fields are a parse error, not a panic.
        assert!(FieldTuning::from_json("{\"scroll_rate\": 5.0}").is_err());
        assert!(FieldTuning::from_json("not json").is_err());
    }
}
