use std::f32::consts::FRAC_PI_2;

/// Animated sphere, positioned relative to its orbit base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVisual {
    pub radius: f32,
    /// Height of the sphere center above the orbit base.
    pub y: f32,
    /// Unwrapped hue (turns). Wrapped into [0, 1) when converted to RGB.
    pub hue: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Default for SphereVisual {
    fn default() -> Self {
        Self {
            radius: 1.0,
            y: 0.0,
            hue: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl SphereVisual {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }
}

/// Soft blob shadow lying flat on the ground under a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowVisual {
    /// Edge length of the shadow quad.
    pub size: f32,
    /// Height above the ground plane.
    pub lift: f32,
    /// Rotation around X; the quad faces up.
    pub rotation_x: f32,
    /// Material opacity in [0, 1].
    pub opacity: f32,
}

impl Default for ShadowVisual {
    fn default() -> Self {
        Self {
            size: 4.0,
            lift: 0.001,
            rotation_x: -FRAC_PI_2,
            opacity: 1.0,
        }
    }
}

impl ShadowVisual {
    /// Shadow sized relative to the sphere it sits under.
    pub fn for_sphere(radius: f32, size_factor: f32, lift: f32) -> Self {
        Self {
            size: radius * size_factor,
            lift,
            ..Default::default()
        }
    }
}
