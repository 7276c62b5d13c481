use serde::{Deserialize, Serialize};

/// Stable position of an entity within its scene, in `[0, count)`.
/// Doubles as the entity's phase offset in the motion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityIndex(pub u32);

impl EntityIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// How each entity picks its orbit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMode {
    /// Odd indices orbit with `+1`, even indices with `-1`.
    #[default]
    Alternating,
    /// Fractional-remainder test (`index mod 1`); every integer index gets `-1`.
    /// Reproduces the output of the scene this engine was modelled on.
    Legacy,
}

impl DirectionMode {
    /// Orbit direction sign for the given index.
    pub fn sign(self, index: u32) -> f32 {
        let turns = match self {
            DirectionMode::Alternating => index % 2 != 0,
            DirectionMode::Legacy => (index as f32) % 1.0 != 0.0,
        };
        if turns { 1.0 } else { -1.0 }
    }
}

/// Output of the motion model for one entity at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameResult {
    /// Orbit base X (world units).
    pub orbit_x: f32,
    /// Orbit base Z (world units). Orbit Y is always 0.
    pub orbit_z: f32,
    /// Sphere height relative to the orbit base.
    pub vertical_offset: f32,
    /// Unwrapped hue; consumers wrap it into their color domain.
    pub hue: f32,
    /// Opacity of the contact shadow.
    pub shadow_opacity: f32,
    /// Sphere rotation around X (radians).
    pub rot_x: f32,
    /// Sphere rotation around Y (radians).
    pub rot_y: f32,
    /// Normalized height in [0, 1] the other fields were derived from.
    pub bounce: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_direction_follows_parity() {
        let mode = DirectionMode::Alternating;
        assert_eq!(mode.sign(0), -1.0);
        assert_eq!(mode.sign(1), 1.0);
        assert_eq!(mode.sign(2), -1.0);
        assert_eq!(mode.sign(7), 1.0);
    }

    #[test]
    fn legacy_direction_is_always_negative_for_integers() {
        for i in 0..32 {
            assert_eq!(DirectionMode::Legacy.sign(i), -1.0, "index {i}");
        }
    }

    #[test]
    fn direction_mode_serializes_snake_case() {
        let json = serde_json::to_string(&DirectionMode::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
    }
}
