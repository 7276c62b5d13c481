use orbit_engine::bridge::protocol::*;
use orbit_engine::{
    FrameData, OrbitControls, ProtocolLayout, RenderLoop, Renderer, Result, SceneConfig,
    Viewport,
};

/// Renderer that packs each frame into one flat f32 buffer for the host.
///
/// The host (TypeScript) reads the buffer through `get_buffer_ptr()` and draws
/// it with its own GPU backend.
pub struct SharedBufferRenderer {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
}

impl SharedBufferRenderer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_MAX_SPHERES] = layout.max_spheres as f32;
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        Self { layout, buffer }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }
}

impl Renderer for SharedBufferRenderer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn render(&mut self, frame: &FrameData<'_>) {
        let count = frame.spheres.len().min(self.layout.max_spheres);
        if count < frame.spheres.len() {
            log::warn!(
                "SharedBufferRenderer: {} spheres exceed capacity {}",
                frame.spheres.len(),
                self.layout.max_spheres
            );
        }

        self.buffer[HEADER_LOCK] = 1.0;

        let spheres = &frame.sphere_floats()[..count * SPHERE_FLOATS];
        let at = self.layout.sphere_data_offset;
        self.buffer[at..at + spheres.len()].copy_from_slice(spheres);

        let shadows = &frame.shadow_floats()[..count * SHADOW_FLOATS];
        let at = self.layout.shadow_data_offset;
        self.buffer[at..at + shadows.len()].copy_from_slice(shadows);

        let at = self.layout.camera_data_offset;
        self.buffer[at..at + CAMERA_FLOATS].copy_from_slice(frame.camera.as_floats());

        let header = &mut self.buffer[..HEADER_FLOATS];
        header[HEADER_SPHERE_COUNT] = count as f32;
        header[HEADER_ELAPSED] = frame.elapsed;
        header[HEADER_GROUND_SIZE] = frame.ground.size;
        header[HEADER_GROUND_REPEATS] = frame.ground.repeats;
        header[HEADER_GROUND_TINT_R] = frame.ground.tint[0];
        header[HEADER_GROUND_TINT_G] = frame.ground.tint[1];
        header[HEADER_GROUND_TINT_B] = frame.ground.tint[2];
        header[HEADER_LIGHT_R] = frame.light.color[0];
        header[HEADER_LIGHT_G] = frame.light.color[1];
        header[HEADER_LIGHT_B] = frame.light.color[2];
        header[HEADER_LIGHT_INTENSITY] = frame.light.intensity;
        header[HEADER_FRAME_COUNTER] = (frame.frame + 1) as f32;
        header[HEADER_LOCK] = 0.0;
    }

    fn resize(&mut self, viewport: &Viewport) {
        self.buffer[HEADER_VIEWPORT_WIDTH] = viewport.width;
        self.buffer[HEADER_VIEWPORT_HEIGHT] = viewport.height;
        self.buffer[HEADER_PIXEL_RATIO] = viewport.pixel_ratio;
    }
}

/// Scene runner behind the `export_scene!` exports.
///
/// Each demo keeps one in a `thread_local!` and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs.
pub struct SceneRunner {
    render_loop: RenderLoop<OrbitControls, SharedBufferRenderer>,
    config: SceneConfig,
    last_error: Option<String>,
}

impl SceneRunner {
    pub fn new(config: SceneConfig) -> Result<Self> {
        let viewport = Viewport::default();
        let controls = OrbitControls::from_config(&config.camera, &viewport);
        let mut renderer = SharedBufferRenderer::new(ProtocolLayout::from_config(&config));
        renderer.resize(&viewport);

        let render_loop = RenderLoop::new(&config, controls, renderer)?;
        Ok(Self { render_loop, config, last_error: None })
    }

    /// Parse a JSON scene config; an empty string selects the default scene.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Self::new(SceneConfig::default());
        }
        Self::new(SceneConfig::from_json(json)?)
    }

    pub fn start(&mut self) {
        self.render_loop.start();
    }

    /// Run one frame. Errors are logged and kept for `last_error()`.
    pub fn tick(&mut self, dt: f32) {
        if let Err(err) = self.render_loop.tick(dt) {
            log::error!("SceneRunner: tick failed: {err}");
            self.last_error = Some(err.to_string());
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let viewport = self.render_loop.resize(width, height, device_pixel_ratio);
        log::debug!(
            "SceneRunner: resized to {:?} physical pixels",
            viewport.physical_size()
        );
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.render_loop.controls_mut().rotate(dx, dy);
    }

    pub fn zoom(&mut self, factor: f32) {
        self.render_loop.controls_mut().zoom(factor);
    }

    // ---- Accessors for shared-buffer reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.render_loop.renderer().as_ptr()
    }

    pub fn buffer(&self) -> &[f32] {
        self.render_loop.renderer().buffer()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.render_loop.renderer().layout().buffer_total_floats as u32
    }

    /// The validated scene config as JSON: tessellation, textures and light
    /// direction the host needs to build its resources.
    pub fn scene_config_json(&self) -> String {
        match self.config.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("SceneRunner: config serialization failed: {err}");
                String::new()
            }
        }
    }

    pub fn sphere_count(&self) -> u32 {
        self.render_loop.scene().len() as u32
    }

    pub fn elapsed(&self) -> f32 {
        self.render_loop.clock().elapsed()
    }

    pub fn frame_counter(&self) -> u32 {
        self.render_loop.frames_rendered() as u32
    }

    /// Most recent error from the runner or from an entity update, or "".
    pub fn last_error(&self) -> String {
        self.last_error
            .as_deref()
            .or(self.render_loop.last_error())
            .unwrap_or_default()
            .to_string()
    }
}
