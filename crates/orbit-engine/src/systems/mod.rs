pub mod motion;
pub mod frame_update;
pub mod color;
pub mod render;
