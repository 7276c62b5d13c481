pub mod instance;
pub mod camera;
pub mod traits;

pub use traits::{DirectionalLight, FrameData, GroundPlane, Renderer};
