// systems/motion.rs
//
// Procedural motion for orbiting entities.
// Pure math over (elapsed time, index, count, base height): no scene access, no state.

use std::f32::consts::TAU;

use crate::api::types::{DirectionMode, FrameResult};
use crate::error::{OrbitError, Result};

/// Orbit angular speed in radians per second.
pub const ORBIT_SPEED: f32 = 0.2;
/// Peak orbit radius in world units.
pub const ORBIT_RADIUS: f32 = 10.0;
/// Bounce phase advance per second.
pub const BOUNCE_RATE: f32 = 2.0;
/// Vertical travel around the base height.
pub const BOUNCE_LOW: f32 = -2.0;
pub const BOUNCE_HIGH: f32 = 2.0;
/// Shadow opacity when the sphere is lowest / highest.
pub const MAX_SHADOW_OPACITY: f32 = 1.0;
pub const MIN_SHADOW_OPACITY: f32 = 0.1;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalized height in [0, 1]. Periodic in `elapsed` with period π.
#[inline]
pub fn bounce_factor(elapsed: f32, index: u32) -> f32 {
    (elapsed * BOUNCE_RATE + index as f32).sin().abs()
}

/// Compute one entity's frame with the default (alternating) direction policy.
pub fn compute_frame(elapsed: f32, index: u32, count: u32, base_height: f32) -> Result<FrameResult> {
    compute_frame_with(DirectionMode::default(), elapsed, index, count, base_height)
}

/// Compute one entity's frame.
///
/// Non-finite `elapsed` yields non-finite output; guarding time is the clock's job.
pub fn compute_frame_with(
    direction: DirectionMode,
    elapsed: f32,
    index: u32,
    count: u32,
    base_height: f32,
) -> Result<FrameResult> {
    if count == 0 {
        return Err(OrbitError::InvalidArgument { context: "entity count", value: 0 });
    }
    if index >= count {
        return Err(OrbitError::InvalidArgument {
            context: "entity index out of range",
            value: index as usize,
        });
    }

    let i = index as f32;
    let u = i / count as f32;
    let speed = elapsed * ORBIT_SPEED;
    let angle = speed + u * TAU * direction.sign(index);
    let radius = (speed - i).sin() * ORBIT_RADIUS;

    let bounce = bounce_factor(elapsed, index);

    Ok(FrameResult {
        orbit_x: angle.cos() * radius,
        orbit_z: angle.sin() * radius,
        vertical_offset: base_height + lerp(BOUNCE_LOW, BOUNCE_HIGH, bounce),
        hue: angle,
        shadow_opacity: lerp(MAX_SHADOW_OPACITY, MIN_SHADOW_OPACITY, bounce),
        rot_x: bounce / 2.0,
        rot_y: bounce / 1.2,
        bounce,
    })
}
