//! Six spheres orbiting over a checkerboard, each with a fake contact shadow
//! that fades as its sphere floats higher.
//!
//! The browser host calls `scene_init()` once, then `scene_tick(dt)` from
//! `requestAnimationFrame`, and draws from the shared buffer.

use wasm_bindgen::prelude::*;

pub const SCENE_JSON: &str = include_str!("../scene.json");

orbit_web::export_scene!("contact-shadows", SCENE_JSON);
