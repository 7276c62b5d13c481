pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod controls;
pub mod bridge;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{
    CameraConfig, GroundConfig, LightConfig, SceneConfig, ShadowConfig, SphereConfig,
};
pub use api::types::{DirectionMode, EntityIndex, FrameResult};
pub use error::{OrbitError, Result};
pub use components::entity::{EntityState, Transform};
pub use components::mesh::{ShadowVisual, SphereVisual};
pub use core::time::Clock;
pub use core::scene::Scene;
pub use core::render_loop::{FixedStepHost, HostScheduler, LoopState, RenderLoop, TickReport};
pub use systems::motion::{compute_frame, compute_frame_with};
pub use systems::frame_update::{update_entities, UpdateReport};
pub use systems::render::{build_instance_buffer, SphereMaterial};
pub use renderer::instance::{InstanceBuffer, ShadowInstance, SphereInstance};
pub use renderer::camera::{CameraUniform, PerspectiveCamera, Viewport};
pub use renderer::traits::{DirectionalLight, FrameData, GroundPlane, Renderer};
pub use controls::orbit::{CameraControls, OrbitControls};
pub use bridge::protocol::ProtocolLayout;
