use serde::{Deserialize, Serialize};

use crate::api::types::DirectionMode;
use crate::error::{OrbitError, Result};

/// Scene configuration, provided once at assembly time.
/// `SceneConfig::default()` reproduces the reference scene: six unit spheres
/// floating two units above a 40-unit checkerboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spheres: SphereConfig,
    pub shadow: ShadowConfig,
    pub ground: GroundConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    /// Orbit direction policy.
    pub direction: DirectionMode,
    /// Entity capacity reserved in the shared buffer (default: 64).
    pub max_entities: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spheres: SphereConfig::default(),
            shadow: ShadowConfig::default(),
            ground: GroundConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            direction: DirectionMode::default(),
            max_entities: 64,
        }
    }
}

/// Sphere geometry and material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Number of orbiting entities. Fixed for the scene lifetime.
    pub count: usize,
    pub radius: f32,
    /// Resting height of the sphere's bottom above the ground.
    pub lift: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// HSL saturation of the sphere material.
    pub saturation: f32,
    /// HSL lightness of the sphere material.
    pub lightness: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            count: 6,
            radius: 1.0,
            lift: 2.0,
            width_segments: 32,
            height_segments: 16,
            saturation: 1.0,
            lightness: 0.75,
        }
    }
}

impl SphereConfig {
    /// Baseline height of each sphere's center above its orbit base.
    pub fn base_height(&self) -> f32 {
        self.radius + self.lift
    }
}

/// Contact shadow quad under each sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Quad edge length as a multiple of the sphere radius.
    pub size_factor: f32,
    /// Offset above the ground to avoid z-fighting.
    pub lift: f32,
    /// Texture the host samples for the soft blob.
    pub texture: String,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            size_factor: 4.0,
            lift: 0.001,
            texture: "roundshadow.png".to_string(),
        }
    }
}

/// Checkerboard ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub size: f32,
    pub texture: String,
    /// RGB multiplier applied to the texture (values > 1 brighten).
    pub tint: [f32; 3],
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            texture: "checkerboard.png".to_string(),
            tint: [1.5, 1.5, 1.5],
        }
    }
}

impl GroundConfig {
    /// Texture repeats per axis (one checker tile per two world units).
    pub fn repeats(&self) -> f32 {
        self.size / 2.0
    }
}

/// Perspective camera and orbit controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            position: [1.0, 2.0, 5.0],
            target: [0.0, 0.0, 0.0],
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 0.5,
            max_distance: 80.0,
        }
    }
}

/// Single directional light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Packed 0xRRGGBB color.
    pub color: u32,
    pub intensity: f32,
    pub direction: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: 0x000ccc,
            intensity: 1.0,
            direction: [0.0, -1.0, 0.0],
        }
    }
}

impl LightConfig {
    /// Unpack the hex color into linear 0..1 channels.
    pub fn rgb(&self) -> [f32; 3] {
        [
            ((self.color >> 16) & 0xff) as f32 / 255.0,
            ((self.color >> 8) & 0xff) as f32 / 255.0,
            (self.color & 0xff) as f32 / 255.0,
        ]
    }
}

impl SceneConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize for the host, which builds geometry and loads textures from it.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject configs that cannot produce a scene.
    pub fn validate(&self) -> Result<()> {
        if self.spheres.count == 0 {
            return Err(OrbitError::InvalidConfig("spheres.count must be > 0".into()));
        }
        if self.spheres.count > self.max_entities {
            return Err(OrbitError::InvalidConfig(format!(
                "spheres.count ({}) exceeds max_entities ({})",
                self.spheres.count, self.max_entities
            )));
        }
        if self.spheres.radius <= 0.0 {
            return Err(OrbitError::InvalidConfig("spheres.radius must be > 0".into()));
        }
        if self.ground.size <= 0.0 {
            return Err(OrbitError::InvalidConfig("ground.size must be > 0".into()));
        }
        let cam = &self.camera;
        if cam.near <= 0.0 || cam.far <= cam.near {
            return Err(OrbitError::InvalidConfig(format!(
                "camera planes must satisfy 0 < near < far (near={}, far={})",
                cam.near, cam.far
            )));
        }
        if !(cam.min_distance >= 0.0 && cam.min_distance <= cam.max_distance) {
            return Err(OrbitError::InvalidConfig(format!(
                "camera distances must satisfy 0 <= min_distance <= max_distance (min={}, max={})",
                cam.min_distance, cam.max_distance
            )));
        }
        if !(0.0..=1.0).contains(&cam.damping_factor) {
            return Err(OrbitError::InvalidConfig("camera.damping_factor must be in [0, 1]".into()));
        }
        Ok(())
    }
}
