//! Position normalization
//!
//! Robots report their position either as Cartesian `x`/`y` or as
//! compass-relative offsets (`north`/`south`, `east`/`west`). Everything past
//! the boundary works on the canonical Cartesian [`Position`], so the two
//! shapes are resolved here exactly once.
//!
//! Precedence rules:
//! - a complete Cartesian pair wins over any compass fields present
//! - `north` wins over `south`, `east` wins over `west`

use crate::core::{Position, RawPosition};

/// Returns true when `raw` matches the Cartesian or the compass shape.
pub fn validate(raw: &RawPosition) -> bool {
    has_cartesian(raw) || (has_northing(raw) && has_easting(raw))
}

/// Converts `raw` to canonical Cartesian form.
///
/// Callers are expected to [`validate`] first. An axis with no usable field
/// comes out as `0.0`.
pub fn normalize(raw: &RawPosition) -> Position {
    if let (Some(x), Some(y)) = (raw.x, raw.y) {
        return Position { x, y };
    }

    let y = match (raw.north, raw.south) {
        (Some(north), _) => north,
        (None, Some(south)) => -south,
        (None, None) => 0.0,
    };
    let x = match (raw.east, raw.west) {
        (Some(east), _) => east,
        (None, Some(west)) => -west,
        (None, None) => 0.0,
    };

    Position { x, y }
}

fn has_cartesian(raw: &RawPosition) -> bool {
    raw.x.is_some() && raw.y.is_some()
}

fn has_northing(raw: &RawPosition) -> bool {
    raw.north.is_some() || raw.south.is_some()
}

fn has_easting(raw: &RawPosition) -> bool {
    raw.east.is_some() || raw.west.is_some()
}

impl RawPosition {
    pub fn is_valid(&self) -> bool {
        validate(self)
    }

    /// Validates and normalizes in one step
    pub fn into_position(self) -> Option<Position> {
        if validate(&self) {
            Some(normalize(&self))
        } else {
            None
        }
    }
}
