use crate::api::config::SceneConfig;
use crate::api::types::DirectionMode;
use crate::controls::orbit::CameraControls;
use crate::core::scene::Scene;
use crate::core::time::Clock;
use crate::error::{OrbitError, Result};
use crate::renderer::camera::Viewport;
use crate::renderer::instance::InstanceBuffer;
use crate::renderer::traits::{DirectionalLight, FrameData, GroundPlane, Renderer};
use crate::systems::frame_update::update_entities;
use crate::systems::render::{build_instance_buffer, SphereMaterial};

/// Per-frame callback source.
///
/// In the browser the host calls into the loop instead (`requestAnimationFrame`
/// drives `scene_tick`); native hosts and tests implement this.
pub trait HostScheduler {
    /// Block until the next frame and return its delta in seconds,
    /// or `None` once the host stops scheduling frames.
    fn next_frame(&mut self) -> Option<f32>;
}

/// Emits `frames` ticks of a constant delta, then stops.
#[derive(Debug, Clone)]
pub struct FixedStepHost {
    dt: f32,
    remaining: u32,
}

impl FixedStepHost {
    pub fn new(dt: f32, frames: u32) -> Self {
        Self { dt, remaining: frames }
    }
}

impl HostScheduler for FixedStepHost {
    fn next_frame(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, no frame run yet.
    Idle,
    /// Steady per-frame cycle.
    Running,
}

/// Summary of one running tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub elapsed: f32,
    /// Entities written by the frame updater.
    pub updated: usize,
    /// Entities left untouched because their motion failed.
    pub failed: usize,
}

/// Drives clock, frame updater, camera controls and renderer, one tick at a time.
pub struct RenderLoop<C: CameraControls, R: Renderer> {
    state: LoopState,
    clock: Clock,
    scene: Scene,
    direction: DirectionMode,
    material: SphereMaterial,
    ground: GroundPlane,
    light: DirectionalLight,
    controls: C,
    renderer: R,
    instances: InstanceBuffer,
    frames_rendered: u64,
    last_error: Option<String>,
}

impl<C: CameraControls, R: Renderer> RenderLoop<C, R> {
    pub fn new(config: &SceneConfig, controls: C, renderer: R) -> Result<Self> {
        let scene = Scene::assemble(config)?;
        Ok(Self::with_scene(scene, config, controls, renderer))
    }

    /// Use an already assembled scene; `config` supplies everything else.
    pub fn with_scene(scene: Scene, config: &SceneConfig, controls: C, renderer: R) -> Self {
        let instances = InstanceBuffer::with_capacity(scene.len());
        Self {
            state: LoopState::Idle,
            clock: Clock::new(),
            scene,
            direction: config.direction,
            material: SphereMaterial {
                saturation: config.spheres.saturation,
                lightness: config.spheres.lightness,
            },
            ground: GroundPlane::from_config(&config.ground),
            light: DirectionalLight::from_config(&config.light),
            controls,
            renderer,
            instances,
            frames_rendered: 0,
            last_error: None,
        }
    }

    /// Idle → Running. Later calls do nothing.
    pub fn start(&mut self) {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                log::info!(
                    "RenderLoop: running {} entities on {}",
                    self.scene.len(),
                    self.renderer.backend()
                );
            }
            LoopState::Running => log::debug!("RenderLoop: start() while already running"),
        }
    }

    /// Run one frame: clock, entity update, controls, instance rebuild, render.
    ///
    /// Entities whose motion fails keep their previous state; the failure is
    /// logged and kept in `last_error` and the frame is still rendered.
    pub fn tick(&mut self, frame_dt: f32) -> Result<TickReport> {
        if self.state != LoopState::Running {
            return Err(OrbitError::NotRunning);
        }

        let elapsed = self.clock.advance(frame_dt);

        let report = update_entities(self.scene.entities_mut(), elapsed, self.direction);
        if let Some((slot, err)) = report.errors.last() {
            log::error!(
                "RenderLoop: {} entities not updated at t={elapsed}; entity {slot}: {err}",
                report.errors.len()
            );
            self.last_error = Some(err.to_string());
        }

        self.controls.advance();

        build_instance_buffer(self.scene.iter(), self.material, &mut self.instances);
        let frame = FrameData {
            spheres: &self.instances.spheres,
            shadows: &self.instances.shadows,
            camera: self.controls.camera().uniform(),
            ground: &self.ground,
            light: &self.light,
            elapsed,
            frame: self.frames_rendered,
        };
        self.renderer.render(&frame);
        self.frames_rendered += 1;

        Ok(TickReport {
            elapsed,
            updated: report.updated,
            failed: report.errors.len(),
        })
    }

    /// Start and tick once per host frame until the host stops.
    /// Returns the number of frames run.
    pub fn run<H: HostScheduler>(&mut self, host: &mut H) -> Result<u64> {
        self.start();
        let mut frames = 0;
        while let Some(dt) = host.next_frame() {
            self.tick(dt)?;
            frames += 1;
        }
        Ok(frames)
    }

    /// Surface size changed: update the camera projection and tell the renderer.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> Viewport {
        let viewport = Viewport::new(width, height, device_pixel_ratio);
        self.controls.camera_mut().resize(&viewport);
        self.renderer.resize(&viewport);
        viewport
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Most recent per-entity failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
