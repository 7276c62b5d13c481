// controls/orbit.rs
//
// Damped orbit controls around a target point.
// Input is queued by rotate()/zoom(); advance() applies it once per frame.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::api::config::CameraConfig;
use crate::renderer::camera::{PerspectiveCamera, Viewport};

/// Camera/controls collaborator driven by the render loop.
pub trait CameraControls {
    /// Apply pending input and damping. Called once per tick.
    fn advance(&mut self);

    /// The camera these controls steer.
    fn camera(&self) -> &PerspectiveCamera;

    fn camera_mut(&mut self) -> &mut PerspectiveCamera;
}

/// Keeps the polar angle away from the poles so `look_at` stays defined.
const POLAR_EPS: f32 = 1e-4;
/// Remaining rotation below this is dropped.
const SETTLE_EPS: f32 = 1e-6;

pub struct OrbitControls {
    camera: PerspectiveCamera,

    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per frame when damping.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians of rotation per unit of `rotate()` input.
    pub rotate_speed: f32,

    radius: f32,
    /// Azimuth around the Y axis.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,

    rotate_delta: Vec2,
    zoom_scale: f32,
}

impl OrbitControls {
    pub fn new(camera: PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        Self {
            camera,
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            rotate_speed: 1.0,
            radius,
            theta,
            phi,
            rotate_delta: Vec2::ZERO,
            zoom_scale: 1.0,
        }
    }

    pub fn from_config(config: &CameraConfig, viewport: &Viewport) -> Self {
        let mut controls = Self::new(PerspectiveCamera::from_config(config, viewport));
        controls.enable_damping = config.enable_damping;
        controls.damping_factor = config.damping_factor;
        controls.min_distance = config.min_distance;
        controls.max_distance = config.max_distance;
        controls
    }

    /// Queue a rotation: `dx` turns around the target, `dy` tilts.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.rotate_delta += Vec2::new(dx, dy) * self.rotate_speed;
    }

    /// Queue a zoom. `factor < 1` moves closer, `> 1` moves away.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom_scale *= factor;
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Rotation still waiting to be applied.
    pub fn pending_rotation(&self) -> Vec2 {
        self.rotate_delta
    }

    fn sync_camera(&mut self) {
        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        self.camera.position = self.camera.target + offset;
    }
}

impl CameraControls for OrbitControls {
    fn advance(&mut self) {
        if self.enable_damping {
            let applied = self.rotate_delta * self.damping_factor;
            self.theta += applied.x;
            self.phi += applied.y;
            self.rotate_delta *= 1.0 - self.damping_factor;
            if self.rotate_delta.length_squared() < SETTLE_EPS * SETTLE_EPS {
                self.rotate_delta = Vec2::ZERO;
            }
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }
        self.phi = self.phi.clamp(POLAR_EPS, PI - POLAR_EPS);

        // Inverted limits resolve to `max_distance` instead of panicking.
        self.radius = (self.radius * self.zoom_scale)
            .max(self.min_distance)
            .min(self.max_distance);
        self.zoom_scale = 1.0;

        self.sync_camera();
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> OrbitControls {
        OrbitControls::from_config(&CameraConfig::default(), &Viewport::default())
    }

    #[test]
    fn idle_advance_keeps_camera_in_place() {
        let mut c = controls();
        let before = c.camera().position;
        c.advance();
        assert!((c.camera().position - before).length() < 1e-5);
        assert!((c.distance() - 30f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut c = controls();
        let start = c.camera().position;
        c.rotate(1.0, 0.0);
        c.advance();
        let after_one = c.camera().position;
        assert!((after_one - start).length() > 0.0);
        // Only 5% applied on the first frame.
        assert!((c.pending_rotation().x - 0.95).abs() < 1e-5);

        for _ in 0..400 {
            c.advance();
        }
        assert_eq!(c.pending_rotation(), Vec2::ZERO);
        // Distance to target is preserved by rotation.
        assert!((c.camera().position.length() - 30f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn without_damping_rotation_applies_at_once() {
        let mut c = controls();
        c.enable_damping = false;
        c.rotate(0.5, 0.0);
        c.advance();
        assert_eq!(c.pending_rotation(), Vec2::ZERO);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut c = controls();
        c.enable_damping = false;
        c.rotate(0.0, -10.0);
        c.advance();
        let pos = c.camera().position;
        // Camera stays just off the +Y pole, never flips past it.
        assert!(pos.y > 0.0);
        assert!(pos.x.abs() + pos.z.abs() > 0.0);
    }

    #[test]
    fn zoom_respects_distance_limits() {
        let mut c = controls();
        c.zoom(0.001);
        c.advance();
        assert_eq!(c.distance(), 0.5);
        c.zoom(1000.0);
        c.advance();
        assert_eq!(c.distance(), 80.0);
    }

    #[test]
    fn inverted_distance_limits_do_not_panic() {
        let mut c = controls();
        c.min_distance = 10.0;
        c.max_distance = 1.0;
        c.zoom(2.0);
        c.advance();
        assert_eq!(c.distance(), 1.0);
        assert!(c.camera().position.is_finite());
    }

    #[test]
    fn invalid_zoom_is_ignored() {
        let mut c = controls();
        let d = c.distance();
        c.zoom(-2.0);
        c.zoom(f32::NAN);
        c.advance();
        assert!((c.distance() - d).abs() < 1e-6);
    }
}
